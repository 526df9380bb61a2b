/// Logs a recoverable failure with its call site and a JSON snapshot of the
/// context it happened in.
///
/// ```ignore
/// log_failure!(&err, Select::table(Collection::Faqs));
/// ```
#[macro_export]
macro_rules! log_failure {
    ($err:expr, $params:expr) => {{
        let location = format!("{}:{}", file!(), line!());

        let params_json = ::serde_json::to_value($params)
            .unwrap_or(::serde_json::Value::Null);

        ::log::error!(
            "{location}: {err} (context: {params_json})",
            err = $err,
        );
    }};
}
