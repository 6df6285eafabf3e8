//! CRUD admin page scaffold for one model: a list table plus a create/edit
//! drawer driven by the selected columns and form fields.

mod table;

use crate::{Error, ModelNames, OutputFile, util::ensure_identifier, writer::write_doc_comment};
use crudgen::{Field, GeneratorFormState, ModelDescriptor, ModelForm};
use indoc::formatdoc;
use itertools::Itertools;
use std::collections::BTreeMap;
use tracing::info;

/// Toggles of the generated list table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub add: bool,
    pub edit: bool,
    pub remove: bool,
    pub view: bool,
    /// Show the pagination bar
    pub pagination: bool,
    /// Pass the list query key so the table offers a reload button
    pub reload: bool,
}

#[derive(Clone, Debug)]
pub struct PageWriter {
    pub(crate) names: ModelNames,
    pub(crate) columns: Vec<Field>,
    pub(crate) fields: Vec<Field>,
    pub(crate) display_names: BTreeMap<String, String>,
    pub(crate) options: PageOptions,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            add: true,
            edit: true,
            remove: true,
            view: false,
            pagination: false,
            reload: false,
        }
    }
}

impl From<&ModelForm> for PageOptions {
    fn from(form: &ModelForm) -> Self {
        Self {
            add: form.add,
            edit: form.edit,
            remove: form.remove,
            view: form.view,
            pagination: form.pagination,
            reload: form.reload,
        }
    }
}

impl PageWriter {
    pub fn new(
        model: &ModelDescriptor,
        columns: Vec<Field>,
        fields: Vec<Field>,
        options: PageOptions,
    ) -> Result<Self, Error> {
        let names = ModelNames::new(model)?;
        for field in columns.iter().chain(fields.iter()) {
            ensure_identifier("field name", &field.name)?;
        }
        Ok(Self {
            names,
            columns,
            fields,
            display_names: BTreeMap::new(),
            options,
        })
    }

    pub fn with_display_names(mut self, display_names: BTreeMap<String, String>) -> Self {
        self.display_names = display_names;
        self
    }

    pub fn with_options(mut self, options: PageOptions) -> Self {
        self.options = options;
        self
    }

    /// Page for the form state of the interactive generator
    pub fn from_form_state(state: &GeneratorFormState) -> Result<Self, Error> {
        let model = state.model_descriptor()?;
        Ok(Self::new(
            &model,
            state.selected_columns(),
            state.selected_fields(),
            PageOptions::from(&state.form_data),
        )?
        .with_display_names(state.display_names.clone()))
    }

    pub fn generate(&self) -> OutputFile {
        let name = format!("{}.tsx", self.names.plural_kebab);
        info!("Generating {}", name);
        OutputFile {
            name,
            content: self.write_page(),
        }
    }

    pub fn write_page(&self) -> String {
        let mut lines = Vec::new();
        write_doc_comment(&mut lines);
        lines.push(self.gen_import());
        lines.push(self.gen_page_component());
        lines.push(self.gen_item_drawer());
        lines.push(Self::gen_layout());
        let mut content = lines.join("\n\n");
        content.push('\n');
        content
    }

    pub fn gen_import(&self) -> String {
        let ModelNames {
            plural,
            plural_camel,
            singular_kebab,
            ..
        } = &self.names;
        formatdoc! {"
            import {{ NextPageWithLayout }} from '@/types';
            import {{ useApi }} from '@src/api';
            import {{ Box }} from '@components/box';
            import {{ AutoForm }} from '@components/form/auto-form';
            import {{ MyDrawer }} from '@components/my-drawer';
            import {{ numericColumn }} from '@components/table/components';
            import Table from '@components/table/table';
            import {{ useCrudModal }} from '@hooks/use-crud-modal';
            import {{ useLocationParams }} from '@hooks/use-location-params';
            import {{ useTableFunctions }} from '@hooks/use-table-functions';
            import useLocalizedString from '@hooks/use-transform-string';
            import {{ defaultDateTimeFormat }} from '@utils/util';
            import {{ {plural_camel}QueryKey, use{plural} }} from '@src/queries/models/{singular_kebab}';
            import {{ Button, Form }} from 'antd';
            import {{ observer }} from 'mobx-react';
            import {{ ReactElement, useEffect, useMemo }} from 'react';
            import {{ useTranslation }} from 'react-i18next';
            import {{ AdminLayout }} from '@src/widgets/dashboard-layout/layouts';
            import {{ DynamicProviders }} from '@hocs/dynamic-providers';"
        }
    }

    /// Callbacks taken from `useTableFunctions`, in the order the hook lists them
    pub fn table_functions(&self) -> Vec<&'static str> {
        let PageOptions {
            add,
            edit,
            remove,
            view,
            ..
        } = self.options;
        [
            (add, "addCallback"),
            (edit, "editCallback"),
            (view, "viewCallback"),
            (remove, "removeCallback, isLoadingRemove"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }

    pub fn gen_page_component(&self) -> String {
        let ModelNames {
            plural,
            plural_camel,
            singular,
            ..
        } = &self.names;
        let options = &self.options;

        let mut lines = vec!["const Page: NextPageWithLayout = observer(() => {".to_owned()];
        if options.remove {
            lines.push("  const api = useApi();".to_owned());
        }
        lines.push("  const { t } = useTranslation();".to_owned());
        let functions = self.table_functions();
        if !functions.is_empty() {
            let model_api = if options.remove {
                format!("api.apis.{singular}")
            } else {
                String::new()
            };
            lines.push(format!(
                "  const {{ {} }} = useTableFunctions({model_api});",
                functions.iter().join(", ")
            ));
        }
        lines.push(format!(
            "  const {{ isLoading, isError, {plural_camel}Data }} = use{plural}({{ orderBy: {{}} }});"
        ));
        lines.push(self.gen_columns());
        lines.push(String::new());
        lines.push("  return (".to_owned());
        lines.push("    <Box>".to_owned());
        lines.push("      <ItemDrawer />".to_owned());
        lines.push("      <Table".to_owned());

        let mut props = vec![format!("name={{'{plural_camel}'}}")];
        if options.reload {
            props.push(format!("queryKey={{[{plural_camel}QueryKey]}}"));
        }
        props.extend([
            format!("dataSource={{{plural_camel}Data?.data?.data}}"),
            "columns={columns}".to_owned(),
            "size={'small'}".to_owned(),
            "loading={isLoading}".to_owned(),
            "error={isError}".to_owned(),
            format!("total={{{plural_camel}Data?.data?.totalCount}}"),
            format!("hidePagination={{{}}}", !options.pagination),
        ]);
        props.push(match options.add {
            true => "addCallback={addCallback}".to_owned(),
            false => "add={false}".to_owned(),
        });
        props.push(match options.edit {
            true => "editCallback={editCallback}".to_owned(),
            false => "editButton={false}".to_owned(),
        });
        props.push(match options.remove {
            true => "removeCallback={removeCallback}".to_owned(),
            false => "removeButton={false}".to_owned(),
        });
        if options.view {
            props.push("viewCallback={viewCallback}".to_owned());
        }
        lines.extend(props.into_iter().map(|prop| format!("        {prop}")));

        lines.push("      />".to_owned());
        lines.push("    </Box>".to_owned());
        lines.push("  );".to_owned());
        lines.push("});".to_owned());
        lines.join("\n")
    }

    pub fn gen_item_drawer(&self) -> String {
        let ModelNames {
            plural,
            plural_camel,
            singular,
            ..
        } = &self.names;
        let fields = self.gen_fields();
        formatdoc! {"
            const ItemDrawer = observer(() => {{
              const {{ query }} = useLocationParams();
              const api = useApi();
              const [form] = Form.useForm();
              const {{ t }} = useTranslation();
              const {{ localizeString }} = useLocalizedString();

              const {{ isLoadingPost, isLoadingUpdate, isLoadingOne, post, update, dataById, onCancel }} = useCrudModal({{
                form,
                name: {plural_camel}QueryKey,
                model: api.apis.{singular},
                getOne: () =>
                  api.apis.{singular}.findOne({{
                    where: {{ id: query.id }},
                  }}),
              }});

              const onFinish = async (values: any) => {{
                if (query.add) {{
                  values.isDate = undefined;
                  post({{ data: {{ ...values }} }});
                }} else if (query.edit) {{
                  update({{
                    data: {{ ...values }},
                    where: {{
                      id: dataById?.data.id,
                    }},
                  }});
                }}
              }};

              useEffect(() => {{
                if (query.edit && dataById?.data) form.setFieldsValue(dataById?.data);
              }}, [dataById?.data]);

            {fields}

              return (
                <MyDrawer
                  title={{
                    query.add
                      ? t(`nimadir qo'shish`, {{ n: localizeString('{plural}') }})
                      : t(`nimadir o'zgartirish`, {{ n: localizeString('{plural}') }})
                  }}
                  placement={{'right'}}
                  open={{!!query.add || !!query.edit}}
                  onClose={{onCancel}}
                  width={{500}}
                  extra={{
                    <Button onClick={{() => form.submit()}} type=\"primary\" loading={{isLoadingPost || isLoadingUpdate}}>
                      {{query.add ? t(`Qo'shish`) : t('Saqlash')}}
                    </Button>
                  }}
                >
                  <AutoForm
                    form={{form}}
                    fields={{fields}}
                    onCancel={{onCancel}}
                    onFinish={{onFinish}}
                    isSaveLoading={{isLoadingPost || isLoadingUpdate}}
                    loading={{isLoadingOne}}
                    saveTitle={{query.add ? t(`Qo'shish`) : t('Saqlash')}}
                    cancelTitle={{t('Bekor qilmoqchimisiz?')}}
                    hideButtons
                  />
                </MyDrawer>
              );
            }});"
        }
    }

    pub fn gen_layout() -> String {
        [
            "Page.getLayout = function getLayout(page: ReactElement) {",
            "  return (",
            "    <DynamicProviders>",
            "      <AdminLayout>{page}</AdminLayout>",
            "    </DynamicProviders>",
            "  );",
            "};",
            "",
            "export default Page;",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PRODUCT: &str = "model Product {
  id        Int      @id
  title     String
  price     Int
  active    Boolean
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt
}";

    fn product(options: PageOptions) -> PageWriter {
        let state = GeneratorFormState::new(ModelForm::new("Product", "Products", PRODUCT));
        PageWriter::from_form_state(&state)
            .unwrap()
            .with_options(options)
    }

    #[test]
    fn test_default_options() {
        let page = product(PageOptions::default()).write_page();

        assert!(page.contains("  const api = useApi();\n  const { t } = useTranslation();"));
        assert!(page.contains(
            "  const { addCallback, editCallback, removeCallback, isLoadingRemove } = useTableFunctions(api.apis.Product);"
        ));
        assert!(page.contains("        hidePagination={true}\n"));
        assert!(page.contains("        addCallback={addCallback}\n"));
        assert!(page.contains("        removeCallback={removeCallback}\n"));
        assert!(!page.contains("queryKey={[productsQueryKey]}"));
        assert!(!page.contains("viewCallback={viewCallback}"));
    }

    #[test]
    fn test_toggled_options() {
        let options = PageOptions {
            add: false,
            edit: false,
            remove: false,
            view: true,
            pagination: true,
            reload: true,
        };
        let page = product(options).gen_page_component();

        assert!(page.starts_with("const Page: NextPageWithLayout = observer(() => {\n  const { t }"));
        assert!(page.contains("  const { viewCallback } = useTableFunctions();"));
        assert!(page.contains("        queryKey={[productsQueryKey]}\n"));
        assert!(page.contains("        hidePagination={false}\n"));
        assert!(page.contains("        add={false}\n        editButton={false}\n        removeButton={false}\n"));
        assert!(page.contains("        viewCallback={viewCallback}\n      />"));
    }

    #[test]
    fn test_no_table_functions() {
        let options = PageOptions {
            add: false,
            edit: false,
            remove: false,
            ..PageOptions::default()
        };
        let page = product(options).gen_page_component();
        assert!(!page.contains("useTableFunctions"));
    }

    #[test]
    fn test_page_sections() {
        let file = product(PageOptions::default()).generate();
        assert_eq!(file.name, "products.tsx");

        let page = file.content;
        assert!(page.contains(
            "import { productsQueryKey, useProducts } from '@src/queries/models/product';"
        ));
        assert!(page.contains("\n\nconst ItemDrawer = observer(() => {\n"));
        assert!(page.contains("    model: api.apis.Product,\n"));
        assert!(page.contains("\n  const fields = useMemo(\n"));
        assert!(page.contains("t(`nimadir qo'shish`, { n: localizeString('Products') })"));
        assert!(page.ends_with("\nexport default Page;\n"));
    }

    #[test]
    fn test_selection_is_respected() {
        let mut state = GeneratorFormState::new(ModelForm::new("Product", "Products", PRODUCT));
        state.select_columns(&["title"]);
        state.select_fields(&["price", "active"]);
        let page = PageWriter::from_form_state(&state).unwrap();

        let columns = page.gen_columns();
        assert!(columns.contains("dataIndex: 'title'"));
        assert!(!columns.contains("dataIndex: 'price'"));

        let fields = page.gen_fields();
        assert!(fields.contains("name: 'price'"));
        assert!(!fields.contains("name: 'title'"));
    }

    #[test]
    fn test_rejects_bad_field_name() {
        let model = ModelDescriptor::new("Product", "Products", "Product").unwrap();
        let result = PageWriter::new(
            &model,
            vec![Field::new("//", Some("comment"))],
            vec![],
            PageOptions::default(),
        );
        assert!(matches!(
            result,
            Err(Error::ModelError(crudgen::Error::InvalidIdentifier { .. }))
        ));
    }

    #[test]
    fn test_output_is_stable() {
        let first = product(PageOptions::default()).write_page();
        let second = product(PageOptions::default()).write_page();
        assert_eq!(first, second);
    }
}
