use schemars::{Schema, schema_for};
use sg_core::entities::{
    AuditRequest, AuditResponse, ChecklistAddRequest, ChecklistAddResponse, ChecklistTask,
    ConsentRequest, ConsentResponse, HealthResponse, TaskList,
};

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;
use crate::cli::root_commands::{SchemaArgs, WireType};

/// Handle `skygate schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_of(args.type_name);
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Text => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}

fn schema_of(wire_type: WireType) -> Schema {
    match wire_type {
        WireType::AuditRequest => schema_for!(AuditRequest),
        WireType::AuditResponse => schema_for!(AuditResponse),
        WireType::ConsentRequest => schema_for!(ConsentRequest),
        WireType::ConsentResponse => schema_for!(ConsentResponse),
        WireType::ChecklistTask => schema_for!(ChecklistTask),
        WireType::TaskList => schema_for!(TaskList),
        WireType::ChecklistAddRequest => schema_for!(ChecklistAddRequest),
        WireType::ChecklistAddResponse => schema_for!(ChecklistAddResponse),
        WireType::HealthResponse => schema_for!(HealthResponse),
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn every_wire_type_has_a_schema() {
        for wire_type in WireType::value_variants() {
            let schema = serde_json::to_value(schema_of(*wire_type)).unwrap();
            assert!(schema.is_object(), "{wire_type:?}");
        }
    }

    #[test]
    fn audit_request_schema_requires_both_fields() {
        let schema = serde_json::to_value(schema_of(WireType::AuditRequest)).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|field| field == "business_id"));
        assert!(required.iter().any(|field| field == "url"));
    }
}
