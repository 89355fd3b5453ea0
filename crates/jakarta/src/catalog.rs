//! Attribute types of the annotations the fixes create or extend.
//!
//! `@Resource` is left out on purpose: its `name` and `type` are inserted as
//! empty strings for the user to fill in.

use crate::names::{persistence, servlet};
use annolint_core::proposal::{AnnotationCatalog, AnnotationInfo, AttributeType};

pub fn jakarta_catalog() -> AnnotationCatalog {
    let mut catalog = AnnotationCatalog::new();

    catalog.insert(
        AnnotationInfo::new(persistence::MAP_KEY_JOIN_COLUMN)
            .attribute("name", AttributeType::String)
            .attribute("referencedColumnName", AttributeType::String)
            .attribute("columnDefinition", AttributeType::String)
            .attribute("table", AttributeType::String)
            .attribute("unique", AttributeType::Boolean)
            .attribute("nullable", AttributeType::Boolean)
            .attribute("insertable", AttributeType::Boolean)
            .attribute("updatable", AttributeType::Boolean)
            .attribute(
                "foreignKey",
                AttributeType::Annotation("jakarta.persistence.ForeignKey".to_string()),
            ),
    );
    catalog.insert(
        AnnotationInfo::new(persistence::MAP_KEY_JOIN_COLUMNS)
            .container_of(persistence::MAP_KEY_JOIN_COLUMN)
            .attribute(
                "foreignKey",
                AttributeType::Annotation("jakarta.persistence.ForeignKey".to_string()),
            ),
    );

    let strings = || AttributeType::array_of(AttributeType::String);
    catalog.insert(
        AnnotationInfo::new(servlet::WEB_SERVLET)
            .attribute("value", strings())
            .attribute("urlPatterns", strings())
            .attribute("name", AttributeType::String)
            .attribute("description", AttributeType::String)
            .attribute("displayName", AttributeType::String)
            .attribute("loadOnStartup", AttributeType::Numeric)
            .attribute("asyncSupported", AttributeType::Boolean)
            .attribute(
                "initParams",
                AttributeType::array_of(AttributeType::Annotation(
                    "jakarta.servlet.annotation.WebInitParam".to_string(),
                )),
            ),
    );
    catalog.insert(
        AnnotationInfo::new(servlet::WEB_FILTER)
            .attribute("value", strings())
            .attribute("urlPatterns", strings())
            .attribute("servletNames", strings())
            .attribute("filterName", AttributeType::String)
            .attribute("description", AttributeType::String)
            .attribute("asyncSupported", AttributeType::Boolean)
            .attribute("dispatcherTypes", AttributeType::array_of(AttributeType::Enum)),
    );
    catalog
}
