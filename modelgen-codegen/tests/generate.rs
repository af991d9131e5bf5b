//! End-to-end tests for the generation run.
//!
//! Rendered sources are checked with inline snapshots. Run
//! `cargo insta review` after intentional changes to the Java output.

use std::{fs, path::Path};

use modelgen_codegen::{
    CompositeConstraintProvider, GenerationError, Generator, JavaType, TypeConverter,
    generator::SCOPES_FILE,
};
use modelgen_core::GENERATED_HEADER;
use modelgen_schema::{Column, Context, Metadata, Target};
use tempfile::TempDir;

const SCHEMA: &str = r#"
[[tables]]
name = "person"
primary_key = "id"

[[tables.columns]]
name = "id"
type = "uuid"
nullable = false

[[tables.columns]]
name = "full_name"
type = "text"

[[tables.columns]]
name = "birth_date"
type = "date"

[[tables.columns]]
name = "status"
type = "person_status"

[[tables.columns]]
name = "address_id"
type = "uuid"

[[tables]]
name = "address"
primary_key = "id"

[[tables.columns]]
name = "id"
type = "uuid"

[[tables.columns]]
name = "city"
type = "text"

[[tables]]
name = "test_schema"
primary_key = "id"

[[tables.columns]]
name = "id"
type = "int8"

[[tables.columns]]
name = "created_at"
type = "timestamp"
"#;

const METADATA: &str = r#"
[[partial_update]]
name = "birth_date_upd"
table = "person"
columns = ["birth_date"]

[[enum]]
name = "person_status"
values = [{ code = "ACTIVE", label = "Active" }, { code = "BLOCKED" }]

[[nested_structure]]
name = "person_with_address"
root = { table = "person", nested = [{ column = "address_id", table = "address" }] }

[async_load]
test_schema = 100
person_with_address = 50
"#;

fn inputs() -> (Context, Metadata) {
    (SCHEMA.parse().unwrap(), METADATA.parse().unwrap())
}

fn file_content<'a>(output: &'a modelgen_codegen::GenerationOutput, path: &str) -> &'a str {
    output
        .files()
        .iter()
        .find(|f| f.relative_path() == Path::new(path))
        .map(|f| f.content())
        .unwrap_or_else(|| panic!("{} was not generated", path))
}

#[test]
fn test_generated_paths() {
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata).run(&context).unwrap();

    let paths: Vec<_> = output
        .files()
        .iter()
        .map(|f| f.relative_path().display().to_string())
        .collect();
    assert_eq!(
        paths,
        [
            "model/src/main/java/model/dto/PersonBirthDateUpd.java",
            "model/src/main/java/model/dto/csv/PersonWithAddressNestedCsv.java",
            "model/src/main/java/model/dto/csv/TestSchemaModel.java",
            "rest-api/src/main/java/restapi/filter/PersonWithAddressFilterStrategy.java",
            "rest-api/src/main/java/restapi/filter/TestSchemaFilterStrategy.java",
            "model/src/main/java/model/dto/enumeration/PersonStatus.java",
        ]
    );
    assert_eq!(output.scope_count(), 6);
}

#[test]
fn test_partial_update_source() {
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata).run(&context).unwrap();

    let source = file_content(&output, "model/src/main/java/model/dto/PersonBirthDateUpd.java");
    insta::assert_snapshot!(source, @r#"
    package model.dto;

    public class PersonBirthDateUpd {

        private java.util.UUID id;
        @javax.xml.bind.annotation.adapters.XmlJavaTypeAdapter(value = com.epam.digital.data.platform.model.core.xmladapter.LocalDateXmlAdapter.class)
        private java.time.LocalDate birthDate;

        public java.util.UUID getId() {
            return id;
        }

        public void setId(java.util.UUID id) {
            this.id = id;
        }

        public java.time.LocalDate getBirthDate() {
            return birthDate;
        }

        public void setBirthDate(java.time.LocalDate birthDate) {
            this.birthDate = birthDate;
        }
    }
    "#);
}

#[test]
fn test_filter_strategy_source() {
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata)
        .with_targets([Target::FilterStrategy])
        .run(&context)
        .unwrap();

    let source = file_content(
        &output,
        "rest-api/src/main/java/restapi/filter/TestSchemaFilterStrategy.java",
    );
    insta::assert_snapshot!(source, @r#"
    package restapi.filter;

    public class TestSchemaFilterStrategy {

        public static final Class<model.dto.csv.TestSchemaModel> MODEL = model.dto.csv.TestSchemaModel.class;
        public static final int LIMIT = 100;

        /** Returns true if a load of the given size is accepted. */
        public boolean accepts(int rowCount) {
            return rowCount <= LIMIT;
        }
    }
    "#);
}

#[test]
fn test_enum_source() {
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata)
        .with_targets([Target::Enum])
        .run(&context)
        .unwrap();

    let source = file_content(
        &output,
        "model/src/main/java/model/dto/enumeration/PersonStatus.java",
    );
    insta::assert_snapshot!(source, @r#"
    package model.dto.enumeration;

    public enum PersonStatus {

        ACTIVE("Active"),
        BLOCKED("BLOCKED");

        private final String label;

        PersonStatus(String label) {
            this.label = label;
        }

        public String getLabel() {
            return label;
        }
    }
    "#);
}

#[test]
fn test_nested_model_uses_enum_and_prefixed_fields() {
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata)
        .with_targets([Target::AsyncLoadModel])
        .run(&context)
        .unwrap();

    let source = file_content(
        &output,
        "model/src/main/java/model/dto/csv/PersonWithAddressNestedCsv.java",
    );
    assert!(source.contains("package model.dto.csv;"));
    assert!(source.contains("    private model.dto.enumeration.PersonStatus status;\n"));
    assert!(source.contains("    private java.lang.String addressIdCity;\n"));
    assert!(source.contains("LocalDateXmlAdapter.class)\n    private java.time.LocalDate birthDate;"));
}

#[test]
fn test_partial_update_enum_field_is_qualified() {
    let (context, _) = inputs();
    let metadata: Metadata = r#"
        [[partial_update]]
        name = "status_upd"
        table = "person"
        columns = ["status"]

        [[enum]]
        name = "person_status"
        values = [{ code = "ACTIVE" }]
    "#
    .parse()
    .unwrap();
    let output = Generator::new(&metadata).run(&context).unwrap();

    let dto = file_content(&output, "model/src/main/java/model/dto/PersonStatusUpd.java");
    assert!(dto.contains("package model.dto;"));
    assert!(dto.contains("    private model.dto.enumeration.PersonStatus status;\n"));
    assert!(dto.contains(
        "    public model.dto.enumeration.PersonStatus getStatus() {\n"
    ));

    let enum_source = file_content(
        &output,
        "model/src/main/java/model/dto/enumeration/PersonStatus.java",
    );
    assert!(enum_source.starts_with("package model.dto.enumeration;\n"));
}

#[test]
fn test_targets_run_in_fixed_order() {
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata)
        .with_targets([Target::Enum, Target::PartialUpdate, Target::Enum])
        .run(&context)
        .unwrap();

    let targets: Vec<_> = output.targets().iter().map(|t| t.target).collect();
    assert_eq!(targets, [Target::PartialUpdate, Target::Enum]);
}

#[test]
fn test_missing_table_fails_whole_run() {
    let (context, _) = inputs();
    let metadata: Metadata = r#"
        [[enum]]
        name = "person_status"
        values = [{ code = "ACTIVE" }]

        [[partial_update]]
        name = "plate_upd"
        table = "vehicle"
        columns = ["plate"]
    "#
    .parse()
    .unwrap();

    let err = Generator::new(&metadata).run(&context).unwrap_err();
    assert!(matches!(err, GenerationError::MissingTable { ref table, .. } if table == "vehicle"));
}

#[test]
fn test_unsupported_type_names_column() {
    let context: Context = r#"
        [[tables]]
        name = "parcel"
        primary_key = "id"
        columns = [{ name = "id", type = "uuid" }, { name = "area", type = "geometry" }]
    "#
    .parse()
    .unwrap();
    let metadata: Metadata = r#"
        [async_load]
        parcel = 10
    "#
    .parse()
    .unwrap();

    let err = Generator::new(&metadata).run(&context).unwrap_err();
    assert_eq!(
        err.to_string(),
        "column 'parcel.area' has unsupported SQL type 'geometry'"
    );
}

#[test]
fn test_duplicate_output_rejected() {
    let context: Context = r#"
        [[tables]]
        name = "person"
        primary_key = "id"
        columns = [{ name = "id", type = "uuid" }]

        [[tables]]
        name = "person_upd"
        primary_key = "id"
        columns = [{ name = "id", type = "uuid" }]
    "#
    .parse()
    .unwrap();
    let metadata: Metadata = r#"
        [[partial_update]]
        name = "upd_x"
        table = "person"
        columns = ["id"]

        [[partial_update]]
        name = "x"
        table = "person_upd"
        columns = ["id"]
    "#
    .parse()
    .unwrap();

    let err = Generator::new(&metadata).run(&context).unwrap_err();
    assert!(matches!(err, GenerationError::DuplicateOutput { .. }));
}

#[test]
fn test_run_is_idempotent() {
    let (context, metadata) = inputs();
    let generator = Generator::new(&metadata);

    let first = generator.run(&context).unwrap();
    let second = generator.run(&context).unwrap();

    assert_eq!(first.scopes_json().unwrap(), second.scopes_json().unwrap());
    let contents = |output: &modelgen_codegen::GenerationOutput| {
        output
            .files()
            .iter()
            .map(|f| f.content().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(contents(&first), contents(&second));
}

#[test]
fn test_no_constraint_providers() {
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata)
        .with_targets([Target::PartialUpdate])
        .with_constraints(CompositeConstraintProvider::empty())
        .run(&context)
        .unwrap();

    let source = file_content(&output, "model/src/main/java/model/dto/PersonBirthDateUpd.java");
    assert!(!source.contains("@"));
}

struct StringsOnly;

impl TypeConverter for StringsOnly {
    fn convert(&self, _column: &Column) -> modelgen_codegen::Result<JavaType> {
        Ok(JavaType::new("java.lang.String"))
    }
}

#[test]
fn test_custom_type_converter() {
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata)
        .with_targets([Target::PartialUpdate])
        .with_converter(StringsOnly)
        .run(&context)
        .unwrap();

    let source = file_content(&output, "model/src/main/java/model/dto/PersonBirthDateUpd.java");
    assert!(source.contains("    private java.lang.String birthDate;\n"));
    assert!(!source.contains("XmlJavaTypeAdapter"));
}

#[test]
fn test_write_outputs_with_header() {
    let temp = TempDir::new().unwrap();
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata).run(&context).unwrap();

    let summary = output.write(temp.path()).unwrap();
    assert_eq!(summary.written.len(), 6);
    assert!(summary.unchanged.is_empty());

    let written =
        fs::read_to_string(temp.path().join("model/src/main/java/model/dto/PersonBirthDateUpd.java"))
            .unwrap();
    assert!(written.starts_with(GENERATED_HEADER));

    let summary = output.write(temp.path()).unwrap();
    assert!(summary.written.is_empty());
    assert_eq!(summary.unchanged.len(), 6);
}

#[test]
fn test_failed_run_leaves_output_untouched() {
    let temp = TempDir::new().unwrap();
    let (context, _) = inputs();
    let metadata: Metadata = r#"
        [async_load]
        vehicle = 10
    "#
    .parse()
    .unwrap();

    let result = Generator::new(&metadata).run(&context);

    assert!(matches!(result, Err(GenerationError::MissingEntity { .. })));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_write_scopes_json() {
    let temp = TempDir::new().unwrap();
    let (context, metadata) = inputs();
    let output = Generator::new(&metadata)
        .with_targets([Target::FilterStrategy])
        .run(&context)
        .unwrap();

    output.write_scopes(temp.path()).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join(SCOPES_FILE)).unwrap())
            .unwrap();
    assert_eq!(json[0]["target"], "filter-strategy");
    assert_eq!(json[0]["scopes"][1]["className"], "TestSchemaFilterStrategy");
    assert_eq!(json[0]["scopes"][1]["modelClassName"], "TestSchemaModel");
    assert_eq!(json[0]["scopes"][1]["limit"], 100);
}
