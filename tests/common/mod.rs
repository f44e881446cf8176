#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod fixtures {
    use typegraph::api::HttpVerb;
    use typegraph::facts::{
        EnumBacking, EnumMember, GenericOwner, MethodDescription, ParameterSource, TypeCatalog,
        TypeDescription, TypeShape,
    };

    fn generic_definition(key: &str, name: &str, module: &str, params: &[&str]) -> TypeDescription {
        TypeDescription::new(
            key,
            name,
            module,
            TypeShape::GenericDefinition {
                parameters: params.iter().map(|p| (*p).into()).collect(),
            },
        )
    }

    fn generic_parameter(key: &str, name: &str, module: &str, owner: &str, position: usize) -> TypeDescription {
        TypeDescription::new(
            key,
            name,
            module,
            TypeShape::GenericParameter {
                owner: GenericOwner::Type { key: owner.into() },
                position,
                constraints: Vec::new(),
            },
        )
    }

    fn instance(key: &str, name: &str, module: &str, definition: &str, args: &[&str]) -> TypeDescription {
        TypeDescription::new(
            key,
            name,
            module,
            TypeShape::GenericInstance {
                definition: definition.into(),
                arguments: args.iter().map(|a| (*a).into()).collect(),
            },
        )
    }

    fn task(key: &str, result: Option<&str>) -> TypeDescription {
        TypeDescription::new(
            key,
            "Task",
            "System",
            TypeShape::Async {
                result: result.map(Into::into),
            },
        )
    }

    fn list(key: &str, element: &str) -> TypeDescription {
        TypeDescription::new(
            key,
            "List",
            "System",
            TypeShape::Collection {
                element: element.into(),
            },
        )
    }

    /// `Pair<T, U>` returned as `Task<Pair<int, string>>` by a single GET action.
    pub fn pair_catalog() -> TypeCatalog {
        TypeCatalog::from_descriptions(vec![
            generic_definition("Demo.Pair`2", "Pair`2", "Demo", &["Demo.Pair`2.T", "Demo.Pair`2.U"])
                .with_namespace("Demo")
                .with_property("First", "Demo.Pair`2.T")
                .with_property("Second", "Demo.Pair`2.U"),
            generic_parameter("Demo.Pair`2.T", "T", "Demo", "Demo.Pair`2", 0),
            generic_parameter("Demo.Pair`2.U", "U", "Demo", "Demo.Pair`2", 1),
            instance(
                "Demo.Pair`2[int32,string]",
                "Pair`2",
                "Demo",
                "Demo.Pair`2",
                &["int32", "string"],
            ),
            task("Task[Demo.Pair`2[int32,string]]", Some("Demo.Pair`2[int32,string]")),
            TypeDescription::new("Demo.PairsController", "PairsController", "Demo", TypeShape::Struct)
                .as_controller(Some("api/[controller]"))
                .with_method(
                    MethodDescription::action("Get")
                        .verb(HttpVerb::Get, None)
                        .returns("Task[Demo.Pair`2[int32,string]]"),
                ),
        ])
    }

    /// A small shop with cycles, an enum, a generic wrapper, an external
    /// module and a controller covering every parameter rule.
    pub fn shop_catalog() -> TypeCatalog {
        TypeCatalog::from_descriptions(vec![
            TypeDescription::new("Shop.Order", "Order", "Shop", TypeShape::Struct)
                .with_namespace("Shop")
                .with_property("Id", "int64")
                .with_property("Status", "Shop.OrderStatus")
                .with_property("Lines", "List[Shop.OrderLine]")
                .with_property("Customer", "Shop.Customer")
                .with_property("Vendor", "Ext.Vendor")
                .with_property("Total", "decimal"),
            TypeDescription::new("Shop.OrderLine", "OrderLine", "Shop", TypeShape::Struct)
                .with_namespace("Shop")
                .with_property("Sku", "string")
                .with_property("Order", "Shop.Order"),
            list("List[Shop.OrderLine]", "Shop.OrderLine"),
            list("List[Shop.Order]", "Shop.Order"),
            TypeDescription::new("Shop.Customer", "Customer", "Shop", TypeShape::Struct)
                .with_namespace("Shop")
                .with_property("Name", "string")
                .with_property("Referrer", "Shop.Customer")
                .with_property("Orders", "List[Shop.Order]"),
            TypeDescription::new(
                "Shop.OrderStatus",
                "OrderStatus",
                "Shop",
                TypeShape::Enum {
                    backing: EnumBacking::Integer,
                    members: vec![
                        EnumMember::new("Pending", 0),
                        EnumMember::new("Shipped", 2),
                        EnumMember::new("Cancelled", 9),
                    ],
                },
            )
            .with_namespace("Shop"),
            TypeDescription::new("Ext.Vendor", "Vendor", "Ext", TypeShape::Struct)
                .with_property("Name", "string"),
            TypeDescription::new("Shop.Clock", "Clock", "Shop", TypeShape::Struct),
            generic_definition("Shop.Box`1", "Box`1", "Shop", &["Shop.Box`1.T"])
                .with_namespace("Shop")
                .with_property("Value", "Shop.Box`1.T"),
            generic_parameter("Shop.Box`1.T", "T", "Shop", "Shop.Box`1", 0),
            instance("Shop.Box`1[int32]", "Box`1", "Shop", "Shop.Box`1", &["int32"]),
            instance("Shop.Box`1[string]", "Box`1", "Shop", "Shop.Box`1", &["string"]),
            task("Task[Shop.Order]", Some("Shop.Order")),
            task("Task", None),
            TypeDescription::new("Shop.OrdersController", "OrdersController", "Shop", TypeShape::Struct)
                .as_controller(Some("api/[controller]"))
                .with_method(
                    MethodDescription::action("Get")
                        .verb(HttpVerb::Get, Some("{id}"))
                        .param("id", "int64")
                        .param("includeLines", "bool")
                        .returns("Task[Shop.Order]"),
                )
                .with_method(
                    MethodDescription::action("List")
                        .param("page", "int32")
                        .returns("List[Shop.Order]"),
                )
                .with_method(
                    MethodDescription::action("Create")
                        .verb(HttpVerb::Post, None)
                        .param("order", "Shop.Order")
                        .param_from("clock", "Shop.Clock", ParameterSource::Services)
                        .returns("Shop.Box`1[int32]"),
                )
                .with_method(
                    MethodDescription::action("Rename")
                        .verb(HttpVerb::Put, Some("{id}/name"))
                        .param("ID", "int64")
                        .param("name", "string")
                        .returns("Shop.Box`1[string]"),
                )
                .with_method(
                    MethodDescription::action("Archive")
                        .verb(HttpVerb::Delete, None)
                        .route("[action]/{id:long}")
                        .param_from("id", "int64", ParameterSource::Route)
                        .returns("Task"),
                )
                .with_method(MethodDescription::action("Vendor").returns("Ext.Vendor"))
                .with_method(
                    MethodDescription::action("Health")
                        .verb(HttpVerb::Get, Some("~/health")),
                )
                .with_method(MethodDescription {
                    non_action: true,
                    ..MethodDescription::action("Configure")
                })
                .with_method(MethodDescription {
                    is_static: true,
                    ..MethodDescription::action("Create2")
                }),
        ])
    }
}

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `content` to a temporary file with the given extension. The file
    /// is removed when the handle is dropped.
    pub fn write_temp(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("typegraph_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }
}

pub mod graph {
    use std::collections::BTreeSet;
    use typegraph::schema::CustomType;
    use typegraph::{InspectionDocument, SchemaNode, TrackedIdentity};

    pub fn defined_ids(doc: &InspectionDocument) -> BTreeSet<TrackedIdentity> {
        doc.definitions
            .iter()
            .filter_map(|node| match node {
                SchemaNode::Custom(custom) => Some(custom.id()),
                _ => None,
            })
            .collect()
    }

    /// Every identity referenced anywhere in the document.
    pub fn referenced_ids(doc: &InspectionDocument) -> BTreeSet<TrackedIdentity> {
        let mut ids = BTreeSet::new();
        for node in &doc.definitions {
            ids.extend(node.referenced_ids());
        }
        for api in &doc.apis {
            ids.extend(api.response.referenced_ids());
            for param in &api.parameters {
                ids.extend(param.schema.referenced_ids());
            }
        }
        ids
    }

    pub fn custom(doc: &InspectionDocument, id: TrackedIdentity) -> &CustomType {
        doc.definitions
            .iter()
            .find_map(|node| match node {
                SchemaNode::Custom(custom) if custom.id() == id => Some(custom),
                _ => None,
            })
            .expect("definition for identity")
    }
}
