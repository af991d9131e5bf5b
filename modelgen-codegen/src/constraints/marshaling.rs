use super::ConstraintProvider;
use crate::{scope::Constraint, type_converter::java};

const XML_ADAPTER: &str = "@javax.xml.bind.annotation.adapters.XmlJavaTypeAdapter";
const ADAPTER_PACKAGE: &str = "com.epam.digital.data.platform.model.core.xmladapter";

/// Adds an XML adapter to date and time fields so they marshal in ISO form.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarshalingConstraintProvider;

impl MarshalingConstraintProvider {
    fn adapter_for(resolved_type: &str) -> Option<&'static str> {
        match resolved_type {
            java::LOCAL_DATE => Some("LocalDateXmlAdapter"),
            java::LOCAL_DATE_TIME => Some("LocalDateTimeXmlAdapter"),
            java::LOCAL_TIME => Some("LocalTimeXmlAdapter"),
            _ => None,
        }
    }
}

impl ConstraintProvider for MarshalingConstraintProvider {
    fn constraints_for(&self, _sql_type: &str, resolved_type: &str) -> Vec<Constraint> {
        Self::adapter_for(resolved_type)
            .map(|adapter| {
                Constraint::new(XML_ADAPTER)
                    .with_content("value", format!("{}.{}.class", ADAPTER_PACKAGE, adapter))
            })
            .into_iter()
            .collect()
    }
}
