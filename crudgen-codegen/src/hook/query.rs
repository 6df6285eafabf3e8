use super::{gen_return, route_comment};
use crate::ModelNames;
use crudgen::{CoreFunction, Permission};
use indoc::formatdoc;

pub(crate) fn gen_query_keys(names: &ModelNames) -> String {
    let ModelNames {
        plural_camel,
        singular_camel,
        plural_kebab,
        singular_kebab,
        ..
    } = names;
    formatdoc! {"
        export const {plural_camel}QueryKey = '{plural_kebab}';
        export const {singular_camel}QueryKey = '{singular_kebab}';
        export const {singular_camel}ExistQueryKey = 'exist-{singular_kebab}';
        export const {plural_camel}CountQueryKey = 'count-{plural_kebab}';
        export const {plural_camel}AggregateQueryKey = 'aggregate-{plural_kebab}';"
    }
}

pub(crate) fn gen_query_hooks(names: &ModelNames) -> Vec<String> {
    vec![
        gen_aggregate_hook(names),
        gen_count_hook(names),
        gen_exist_hook(names),
        gen_pagination_hook(names),
        gen_find_many_hook(names),
        gen_find_one_hook(names),
    ]
}

/// Aggregation has no fixed verb and goes through the raw axios instance
pub(crate) fn gen_aggregate_hook(names: &ModelNames) -> String {
    let ModelNames {
        name,
        plural,
        plural_camel,
        singular_camel,
        ..
    } = names;
    let head = formatdoc! {"
        // POST /api/{singular_camel}/aggregate ({permission})
        export const useAggregate{plural} = (props: Record<string, any>, options: QueryOptions = {{}}) => {{
          const api = useApi();
          const res = useQuery({{
            queryKey: [{plural_camel}AggregateQueryKey, props],
            queryFn: () => api.instance.post('/api/{singular_camel}/aggregate', props),
            ...options,
          }});",
        permission = Permission::Aggregation,
    };
    let tail = gen_return(&[
        format!("isLoadingAggregate{name}: res.isLoading"),
        format!("isErrorAggregate{name}: res.isError"),
        format!("aggregate{plural}: res.data"),
    ]);
    format!("{head}\n{tail}\n}};")
}

pub(crate) fn gen_count_hook(names: &ModelNames) -> String {
    let ModelNames {
        name,
        plural,
        plural_camel,
        ..
    } = names;
    let function = CoreFunction::Count;
    let comment = route_comment(function, names);
    let method = function.method();
    let head = formatdoc! {"
        {comment}
        export const useCount{plural} = (props: Record<string, any>, options: QueryOptions = {{}}) => {{
          const api = useApi();
          const res = useQuery({{
            queryKey: [{plural_camel}CountQueryKey, props],
            queryFn: () => api.apis.{name}.{method}({{ ...props }}),
            ...options,
          }});"
    };
    let tail = gen_return(&[
        format!("isLoadingCount{name}: res.isLoading"),
        format!("isErrorCount{name}: res.isError"),
        format!("count{plural}: res.data"),
    ]);
    format!("{head}\n{tail}\n}};")
}

pub(crate) fn gen_exist_hook(names: &ModelNames) -> String {
    let ModelNames {
        name,
        singular,
        singular_camel,
        ..
    } = names;
    let function = CoreFunction::Exist;
    let comment = route_comment(function, names);
    let method = function.method();
    let head = formatdoc! {"
        {comment}
        export const useExist{singular} = (props: Record<string, any>, options: QueryOptions = {{}}) => {{
          const api = useApi();
          const res = useQuery({{
            queryKey: [{singular_camel}ExistQueryKey, props],
            queryFn: () => api.apis.{name}.{method}({{ ...props }}),
            ...options,
          }});"
    };
    let tail = gen_return(&[
        format!("isLoadingExist{name}: res.isLoading"),
        format!("isErrorExist{name}: res.isError"),
        format!("exist{singular}: res.data"),
    ]);
    format!("{head}\n{tail}\n}};")
}

/// Paged list; waits until the table has reported a page size
pub(crate) fn gen_pagination_hook(names: &ModelNames) -> String {
    let ModelNames {
        name,
        plural,
        plural_camel,
        ..
    } = names;
    let function = CoreFunction::FindMany;
    let comment = route_comment(function, names);
    let method = function.method();
    let head = formatdoc! {"
        {comment}
        export const use{plural}WithPagination = (props: Record<string, any>, options: QueryOptions = {{}}) => {{
          const api = useApi();
          const tableFetchProps = useTableFetchProps();
          const res = useQuery({{
            queryKey: [{plural_camel}QueryKey, tableFetchProps, props],
            queryFn: () =>
              api.apis.{name}.{method}({{
                ...tableFetchProps,
                ...props,
              }}),
            enabled:
              typeof options.enabled === 'undefined' ? !!tableFetchProps.take : !!options.enabled && !!tableFetchProps.take,
            ...options,
          }});"
    };
    let tail = gen_return(&list_entries(names));
    format!("{head}\n{tail}\n}};")
}

pub(crate) fn gen_find_many_hook(names: &ModelNames) -> String {
    let ModelNames {
        name,
        plural,
        plural_camel,
        ..
    } = names;
    let function = CoreFunction::FindMany;
    let comment = route_comment(function, names);
    let method = function.method();
    let head = formatdoc! {"
        {comment}
        export const use{plural} = (props: Record<string, any>, options: QueryOptions = {{}}) => {{
          const api = useApi();
          const res = useQuery({{
            queryKey: [{plural_camel}QueryKey, props],
            queryFn: () => api.apis.{name}.{method}({{ ...props }}),
            enabled: options.enabled != undefined ? !!options.enabled : undefined,
            ...options,
          }});"
    };
    let tail = gen_return(&list_entries(names));
    format!("{head}\n{tail}\n}};")
}

pub(crate) fn gen_find_one_hook(names: &ModelNames) -> String {
    let ModelNames {
        name,
        singular,
        singular_camel,
        ..
    } = names;
    let function = CoreFunction::FindOne;
    let comment = route_comment(function, names);
    let method = function.method();
    let head = formatdoc! {"
        {comment}
        export const use{singular} = (props: Record<string, any>, options: QueryOptions = {{}}) => {{
          const api = useApi();
          const res = useQuery({{
            queryKey: [{singular_camel}QueryKey, props],
            queryFn: () => api.apis.{name}.{method}({{ ...props }}),
            ...(options as any),
          }});"
    };
    let tail = gen_return(&[
        format!("isLoading{singular}: res.isLoading"),
        format!("isError{singular}: res.isError"),
        format!("{singular_camel}Data: res.data as Record<string, any> | undefined"),
    ]);
    format!("{head}\n{tail}\n}};")
}

fn list_entries(names: &ModelNames) -> Vec<String> {
    let ModelNames {
        plural,
        plural_camel,
        ..
    } = names;
    vec![
        format!("isLoading{plural}: res.isLoading"),
        format!("isError{plural}: res.isError"),
        format!("{plural_camel}Data: res.data"),
    ]
}
