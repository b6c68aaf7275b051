use bolero::check;
use chplenv::{EnvProbe, Rule, TaskingSelector};
use std::collections::HashMap;

#[test]
fn fuzz_override_is_verbatim() {
    check!().with_type::<String>().for_each(|value| {
        let mut env = HashMap::new();
        env.insert("CHPL_TASKS".to_owned(), value.clone());
        env.insert("CHPL_TARGET_PLATFORM".to_owned(), "cygwin64".to_owned());

        let selector = TaskingSelector::new(&env, EnvProbe::new(&env));
        let selection = selector.selection();

        if value.is_empty() {
            // Unset: the table decides
            assert_eq!(selection.rule, Rule::Fifo);
            assert_eq!(selector.get(), "fifo");
        } else {
            assert_eq!(selection.rule, Rule::Override);
            assert_eq!(selector.get(), value.as_str());
        }
    });
}
