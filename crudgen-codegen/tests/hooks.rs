use crudgen::{ModelDescriptor, ModelRegistry, RawModel};
use crudgen_codegen::{Error, HookWriter, ModelNames, WriterOutput};
use pretty_assertions::assert_eq;
use std::fs;

fn generate(registry: &ModelRegistry) -> WriterOutput {
    HookWriter::new(registry).unwrap().generate()
}

#[test]
fn order_hooks() {
    let registry = ModelRegistry::build([("Order", RawModel::default())]).unwrap();
    let output = generate(&registry);

    assert_eq!(output.files.len(), 1);
    let file = &output.files[0];
    assert_eq!(file.name, "models/order.ts");
    assert!(file.content.contains("export const useOrders = "));
    assert!(file.content.contains("export const useOrder = "));
    assert!(file.content.contains("export const ordersQueryKey = 'orders';"));
    assert!(file.content.contains("queryFn: () => api.apis.Order.findOne({ ...props }),"));
    assert!(file.content.contains("// POST /api/order/find-first (Read)\nexport const useOrder = "));
}

#[test]
fn plural_override() {
    let registry = ModelRegistry::build([(
        "CourseCategory",
        RawModel::new("CourseCategories", "CourseCategory"),
    )])
    .unwrap();
    let content = &generate(&registry).files[0].content;

    assert!(content.contains("export const courseCategoriesQueryKey = 'course-categories';"));
    assert!(content.contains("export const useCourseCategoriesWithPagination = "));
    assert!(content.contains("export const useDeleteAllCourseCategories = "));
    assert!(content.contains("api.apis.CourseCategory.deleteAll()"));
    assert!(content.contains("// POST /api/courseCategory/delete-all (Delete)"));
}

#[test]
fn generation_is_idempotent() {
    let registry = ModelRegistry::seed().unwrap();
    assert_eq!(generate(&registry), generate(&registry));
}

#[test]
fn seed_registry_writes_every_model() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();

    let registry = ModelRegistry::seed().unwrap();
    let report = generate(&registry).write_to(dir);

    assert!(report.is_complete());
    assert_eq!(report.written.len(), registry.len());
    let order_item = fs::read_to_string(dir.join("models").join("order-item.ts")).unwrap();
    assert!(order_item.contains("export const useOrderItems = "));

    // a second run overwrites in place
    let again = generate(&registry).write_to(dir);
    assert_eq!(again.written.len(), registry.len());
    assert_eq!(
        fs::read_to_string(dir.join("models").join("order-item.ts")).unwrap(),
        order_item
    );
}

#[test]
fn plural_equal_to_singular_is_rejected() {
    assert!(ModelRegistry::build([("Fish", RawModel::new("Fish", "Fish"))]).is_err());

    let fish = ModelDescriptor {
        name: "Fish".to_owned(),
        plural: "Fish".to_owned(),
        singular: "Fish".to_owned(),
    };
    assert!(matches!(
        ModelNames::new(&fish),
        Err(Error::ModelError(crudgen::Error::AmbiguousPlural { .. }))
    ));
}
