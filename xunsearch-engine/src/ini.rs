//! Backend configuration text builder.
//!
//! The backend client is configured with an INI document naming the target
//! index, the two server addresses, and one typed section per schema field.
//! This module only serializes; validation of the result is the backend's
//! job when it loads the text.

use xunsearch_engine_shared::SearchSchema;

use crate::config::EngineConfig;

/// Serialize connection settings and a model's schema into the backend's
/// INI configuration format.
///
/// The output declares, in order: `project.name`, `server.index`,
/// `server.search`, then a `[field]` section with a `type` line per schema
/// field, preserving schema declaration order.
pub fn build_ini(config: &EngineConfig, index_name: &str, schema: &SearchSchema) -> String {
    let mut ini = String::new();

    ini.push_str(&format!("project.name = {}\n", index_name));
    ini.push_str(&format!("server.index = {}\n", config.index_server));
    ini.push_str(&format!("server.search = {}\n", config.search_server));

    for field in schema.fields() {
        ini.push_str(&format!(
            "\n[{}]\ntype = {}\n",
            field.name,
            field.field_type.as_str()
        ));
    }

    ini
}

#[cfg(test)]
mod tests {
    use super::*;
    use xunsearch_engine_shared::FieldType;

    #[test]
    fn test_build_ini_declares_servers_and_fields() {
        let config = EngineConfig::default();
        let schema = SearchSchema::new()
            .with_field("id", FieldType::Id)
            .with_field("title", FieldType::Title)
            .with_field("body", FieldType::Body);

        let ini = build_ini(&config, "posts", &schema);

        assert_eq!(
            ini,
            "project.name = posts\n\
             server.index = localhost:8383\n\
             server.search = localhost:8384\n\
             \n[id]\ntype = id\n\
             \n[title]\ntype = title\n\
             \n[body]\ntype = body\n"
        );
    }

    #[test]
    fn test_build_ini_preserves_schema_order() {
        let config = EngineConfig::default();
        let schema = SearchSchema::new()
            .with_field("zeta", FieldType::String)
            .with_field("alpha", FieldType::Numeric);

        let ini = build_ini(&config, "things", &schema);

        let zeta = ini.find("[zeta]").unwrap();
        let alpha = ini.find("[alpha]").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_build_ini_empty_schema() {
        let config = EngineConfig::default();
        let ini = build_ini(&config, "bare", &SearchSchema::new());

        assert_eq!(
            ini,
            "project.name = bare\n\
             server.index = localhost:8383\n\
             server.search = localhost:8384\n"
        );
    }
}
