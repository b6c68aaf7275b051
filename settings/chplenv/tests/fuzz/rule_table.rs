use bolero::check;
use chplenv::rules::decide;
use chplenv::{Rule, TargetFacts, TaskingBackend};

#[test]
fn fuzz_rule_table_consistency() {
    check!()
        .with_type::<(String, String, String, bool)>()
        .for_each(|(arch, platform, compiler, module)| {
            let facts = TargetFacts::new(arch, platform, compiler, *module);
            let (backend, rule) = decide(&facts);

            // =================================================================
            // RULE / BACKEND AGREEMENT
            // =================================================================

            let expected = match rule {
                Rule::CrayModule => TaskingBackend::Muxed,
                Rule::Fifo => TaskingBackend::Fifo,
                Rule::Default => TaskingBackend::Qthreads,
                Rule::Override => panic!("decide() never reports an override"),
            };
            assert_eq!(backend, expected);

            // =================================================================
            // PRECEDENCE
            // =================================================================

            // 1. Cray module wins over everything
            let cray = TargetFacts::new(arch, &format!("cray-x{platform}"), compiler, true);
            assert_eq!(decide(&cray).0, TaskingBackend::Muxed);

            // 2. Fifo conditions win over the default, whatever else is set
            let knc = TargetFacts::new("knc", platform, compiler, false);
            assert_eq!(decide(&knc).0, TaskingBackend::Fifo);

            let cygwin = TargetFacts::new(arch, &format!("cygwin{platform}"), compiler, *module);
            assert_eq!(decide(&cygwin).0, TaskingBackend::Fifo);

            let netbsd = TargetFacts::new(arch, &format!("netbsd{platform}"), compiler, *module);
            assert_eq!(decide(&netbsd).0, TaskingBackend::Fifo);

            // 3. Without the module, cray-x* is an ordinary platform
            let no_module = TargetFacts::new(arch, platform, compiler, false);
            assert_ne!(decide(&no_module).0, TaskingBackend::Muxed);
        });
}
