//! Macros for ergonomic configuration construction.

/// Build a [`crate::config::Config`] from literal map syntax.
///
/// States and transitions appear in the configuration in the order
/// written. Like the builder, the macro performs no membership checks.
///
/// # Example
///
/// ```
/// use flowstate::fsm_config;
///
/// let config = fsm_config! {
///     initial: "red",
///     states: {
///         "red" => { "go" => "green" },
///         "green" => { "caution" => "yellow" },
///         "yellow" => { "stop" => "red" },
///     }
/// };
///
/// assert_eq!(config.initial, "red");
/// assert_eq!(config.transition_target("green", "caution"), Some("yellow"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $($state:expr => { $($event:expr => $target:expr),* $(,)? }),* $(,)?
        }
    ) => {{
        let mut states = $crate::__private::IndexMap::new();
        $(
            #[allow(unused_mut)]
            let mut transitions = $crate::__private::IndexMap::new();
            $(
                transitions.insert(
                    ::std::string::String::from($event),
                    ::std::string::String::from($target),
                );
            )*
            states.insert(
                ::std::string::String::from($state),
                $crate::config::StateDefinition { transitions },
            );
        )*
        $crate::config::Config {
            initial: ::std::string::String::from($initial),
            states,
        }
    }};
}
