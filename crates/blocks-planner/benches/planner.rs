use blocks_core::{Block, Predicate, World};
use blocks_planner::{GoalStackConfig, GoalStackPlanner};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn reversal_problem(height: usize) -> (World, Vec<Predicate>) {
    let name = |i: usize| Block::new(format!("b{i}"));

    let mut facts = vec![Predicate::OnTable(name(0))];
    for i in 1..height {
        facts.push(Predicate::On(name(i), name(i - 1)));
    }
    facts.push(Predicate::Clear(name(height - 1)));
    facts.push(Predicate::ArmEmpty);

    let goals = (1..height)
        .map(|i| Predicate::On(name(i - 1), name(i)))
        .collect();

    (World::from_facts(facts), goals)
}

fn bench_goal_stack_planner(c: &mut Criterion) {
    let (start, goals) = reversal_problem(64);
    let planner = GoalStackPlanner::new().with_config(GoalStackConfig {
        max_expansions: 4096,
    });

    c.bench_function("blocks-planner/plan(reverse tower, height=64)", |b| {
        b.iter(|| {
            let plan = planner.plan(&start, &goals).expect("plan");
            black_box(plan.len());
        })
    });
}

criterion_group!(benches, bench_goal_stack_planner);
criterion_main!(benches);
