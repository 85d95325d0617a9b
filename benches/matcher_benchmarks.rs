use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rolegate::{match_any, matches, AuthorizationService, MemorySubject, PermissionPath, RoleRegistry, Rule};

fn bench_matches(c: &mut Criterion) {
    let cases = [
        ("exact", "user/edit", "user/edit"),
        ("absorbing_wildcard", "users/*", "users/42/field/extra"),
        ("trailing_wildcard_parent", "user/edit/*", "user/edit"),
        ("mismatch", "article/create", "user/edit"),
    ];

    let mut group = c.benchmark_group("matches");
    for (name, rule, permission) in cases {
        let rule = Rule::new(rule);
        let permission = PermissionPath::new(permission);
        group.bench_function(name, |b| {
            b.iter(|| matches(black_box(&rule), black_box(&permission)));
        });
    }
    group.finish();
}

fn bench_match_any(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_any");
    for size in [4usize, 16, 64] {
        let rules: Vec<Rule> = (0..size)
            .map(|i| Rule::new(format!("resource{i}/action{i}/*")))
            .collect();
        // no rule matches, forcing a scan of the whole set
        let permission = PermissionPath::new("unmatched/path");

        group.bench_with_input(BenchmarkId::from_parameter(size), &rules, |b, rules| {
            b.iter(|| match_any(black_box(rules), black_box(&permission)));
        });
    }
    group.finish();
}

fn bench_permission_decision(c: &mut Criterion) {
    let mut registry = RoleRegistry::new();
    registry.insert("admin", ["user/*", "article/create"]);
    registry.insert("user", ["user/edit", "report/view/*"]);

    let service = AuthorizationService::new(registry);
    let mut subject = MemorySubject::new();
    service.assign_role(&mut subject, ["admin", "user"]).unwrap();

    c.bench_function("has_permission_to", |b| {
        b.iter(|| {
            service.has_permission_to(black_box(&subject), ["user/edit", "article/create"])
        });
    });
}

criterion_group!(
    benches,
    bench_matches,
    bench_match_any,
    bench_permission_decision
);
criterion_main!(benches);
