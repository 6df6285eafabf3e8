use super::{gen_return, route_comment};
use crate::ModelNames;
use crudgen::{CoreFunction, naming::lower_first};
use indoc::formatdoc;

/// One `useMutation` wrapper around a core function
#[derive(Debug)]
pub(crate) struct Mutation {
    pub hook: String,
    pub function: CoreFunction,
    /// Parameter list of `mutationFn`
    pub param: &'static str,
    /// Argument passed on to the API method
    pub arg: String,
    /// Suffix of the returned `isLoading<label>` / `isError<label>` flags,
    /// camelCased it also names `res.mutate`
    pub label: String,
    /// Name of `res.data`, if it is returned
    pub data: Option<String>,
}

pub(crate) fn gen_mutation_hooks(names: &ModelNames) -> Vec<String> {
    let mut hooks: Vec<String> = mutations(names)
        .into_iter()
        .map(|mutation| gen_mutation_hook(names, mutation, None))
        .collect();
    hooks.push(gen_delete_one_hook(names));
    hooks
}

/// Every mutation hook except `useDelete<Singular>`, in file order
pub(crate) fn mutations(names: &ModelNames) -> Vec<Mutation> {
    let ModelNames {
        plural, singular, ..
    } = names;
    let data = "data: Record<string, any>";
    let props = "props: Record<string, any>";
    let filter = "where: Record<string, any>";
    vec![
        Mutation {
            hook: format!("useCreate{plural}"),
            function: CoreFunction::CreateMany,
            param: data,
            arg: "{ data }".to_owned(),
            label: format!("Create{plural}"),
            data: Some(format!("created{plural}")),
        },
        Mutation {
            hook: format!("useCreateList{plural}"),
            function: CoreFunction::CreateList,
            param: data,
            arg: "data".to_owned(),
            label: format!("CreateList{plural}"),
            data: Some(format!("createdList{plural}")),
        },
        Mutation {
            hook: format!("useCreate{singular}"),
            function: CoreFunction::CreateOne,
            param: data,
            arg: "{ data }".to_owned(),
            label: format!("Create{singular}"),
            data: Some(format!("created{singular}")),
        },
        Mutation {
            hook: format!("useUpdate{plural}"),
            function: CoreFunction::UpdateMany,
            param: props,
            arg: "props".to_owned(),
            label: format!("Update{plural}"),
            data: Some(format!("updated{plural}")),
        },
        Mutation {
            hook: format!("useUpdateList{plural}"),
            function: CoreFunction::UpdateList,
            param: props,
            arg: "props".to_owned(),
            label: format!("UpdateList{plural}"),
            data: Some(format!("updatedList{plural}")),
        },
        Mutation {
            hook: format!("useUpdate{plural}List"),
            function: CoreFunction::UpdateList,
            param: props,
            arg: "props".to_owned(),
            label: format!("Update{plural}List"),
            data: Some(format!("updated{plural}List")),
        },
        Mutation {
            hook: format!("useUpdate{singular}"),
            function: CoreFunction::UpdateOne,
            param: props,
            arg: "props".to_owned(),
            label: format!("Update{singular}"),
            data: Some(format!("updated{singular}")),
        },
        Mutation {
            hook: format!("useDelete{plural}"),
            function: CoreFunction::DeleteMany,
            param: filter,
            arg: "{ where }".to_owned(),
            label: format!("Delete{plural}"),
            data: None,
        },
        Mutation {
            hook: format!("useDeleteAll{plural}"),
            function: CoreFunction::DeleteAll,
            param: "",
            arg: String::new(),
            label: format!("DeleteAll{plural}"),
            data: None,
        },
    ]
}

/// `extra` is spliced in between `useMutation` and the return block, and its
/// name is returned as a shorthand property
pub(crate) fn gen_mutation_hook(
    names: &ModelNames,
    mutation: Mutation,
    extra: Option<(String, String)>,
) -> String {
    let Mutation {
        hook,
        function,
        param,
        arg,
        label,
        data,
    } = mutation;
    let name = &names.name;
    let comment = route_comment(function, names);
    let method = function.method();
    let (param, arg) = if function.has_body() {
        (param, arg)
    } else {
        ("", String::new())
    };
    let head = formatdoc! {"
        {comment}
        export const {hook} = (options: QueryOptions, secondaryOptions?: QuerySecondaryOptions) => {{
          const api = useApi();
          const queryClient = useQueryClient();
          const res = useMutation({{
            mutationFn: ({param}) => {{
              return api.apis.{name}.{method}({arg});
            }},
            ...getQueryOptions(queryClient, options, secondaryOptions),
          }});"
    };

    let mut entries = vec![
        format!("isLoading{label}: res.isPending"),
        format!("isError{label}: res.isError"),
        format!("{}: res.mutate", lower_first(&label)),
    ];
    entries.extend(data.map(|data| format!("{data}: res.data")));

    let mut lines = vec![head];
    if let Some((extra_name, extra_code)) = extra {
        lines.push(String::new());
        lines.push(extra_code);
        lines.push(String::new());
        entries.push(extra_name);
    }
    lines.push(gen_return(&entries));
    lines.push("};".to_owned());
    lines.join("\n")
}

/// Accepts a `where` object or a bare id, and adds a callback for table rows
pub(crate) fn gen_delete_one_hook(names: &ModelNames) -> String {
    let singular = &names.singular;
    let callback = format!("delete{singular}FromTable");
    let callback_code = [
        format!("  const {callback} = useCallback("),
        "    (data: Record<string, any>) => {".to_owned(),
        "      res.mutate({ id: data.id });".to_owned(),
        "    },".to_owned(),
        "    [res.mutate],".to_owned(),
        "  );".to_owned(),
    ]
    .join("\n");
    let mutation = Mutation {
        hook: format!("useDelete{singular}"),
        function: CoreFunction::DeleteOne,
        param: "where: Record<string, any> | number | string",
        arg: "typeof where === 'object' ? { where } : { where: { id: where } }".to_owned(),
        label: format!("Delete{singular}"),
        data: None,
    };
    gen_mutation_hook(names, mutation, Some((callback, callback_code)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen::ModelDescriptor;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn order() -> ModelNames {
        let model = ModelDescriptor::new("Order", "Orders", "Order").unwrap();
        ModelNames::new(&model).unwrap()
    }

    #[test]
    fn test_gen_create_many_hook() {
        let names = order();
        let create = mutations(&names).remove(0);
        assert_eq!(
            gen_mutation_hook(&names, create, None),
            indoc! {"
                // POST /api/order/create-many (Create)
                export const useCreateOrders = (options: QueryOptions, secondaryOptions?: QuerySecondaryOptions) => {
                  const api = useApi();
                  const queryClient = useQueryClient();
                  const res = useMutation({
                    mutationFn: (data: Record<string, any>) => {
                      return api.apis.Order.createMany({ data });
                    },
                    ...getQueryOptions(queryClient, options, secondaryOptions),
                  });
                  return {
                    ...res,
                    isLoadingCreateOrders: res.isPending,
                    isErrorCreateOrders: res.isError,
                    createOrders: res.mutate,
                    createdOrders: res.data,
                  };
                };"
            }
        );
    }

    #[test]
    fn test_delete_all_has_no_body() {
        let names = order();
        let hooks = gen_mutation_hooks(&names);
        let delete_all = hooks
            .iter()
            .find(|hook| hook.contains("export const useDeleteAllOrders "))
            .unwrap();

        assert!(delete_all.contains("mutationFn: () => {"));
        assert!(delete_all.contains("return api.apis.Order.deleteAll();"));
        assert!(!delete_all.contains("res.data"));
    }

    #[test]
    fn test_update_hooks_are_patch() {
        let hooks = gen_mutation_hooks(&order());
        let patches = hooks.iter().filter(|hook| hook.starts_with("// PATCH ")).count();
        assert_eq!(patches, 4);
        assert!(hooks.iter().any(|hook| hook.contains("updateOrdersList: res.mutate,")));
        assert!(hooks.iter().any(|hook| hook.contains("updateListOrders: res.mutate,")));
    }

    #[test]
    fn test_gen_delete_one_hook() {
        let hook = gen_delete_one_hook(&order());

        assert!(hook.starts_with("// POST /api/order/delete (Delete)\n"));
        assert!(hook.contains(
            "return api.apis.Order.deleteOne(typeof where === 'object' ? { where } : { where: { id: where } });"
        ));
        assert!(hook.contains("  const deleteOrderFromTable = useCallback(\n"));
        assert!(hook.ends_with("    deleteOrderFromTable,\n  };\n};"));
    }
}
