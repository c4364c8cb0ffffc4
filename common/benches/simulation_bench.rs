use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use common::config::PlaygroundConfig;
use common::games::snake::{Direction, SnakeState};
use common::games::{GameSession, GameSnapshot, Intent, SessionRng};
use common::GameKind;

fn greedy_direction(state: &SnakeState) -> Direction {
    let head = state.body[0];
    if state.food.x < head.x {
        Direction::Left
    } else if state.food.x > head.x {
        Direction::Right
    } else if state.food.y < head.y {
        Direction::Up
    } else {
        Direction::Down
    }
}

fn bench_snake_greedy_game() {
    let config = PlaygroundConfig::default();
    let mut session = GameSession::create(GameKind::Snake, &config, SessionRng::new(42));
    let mut now = Duration::ZERO;
    session.start(now);

    for _ in 0..10_000 {
        let Some(deadline) = session.next_deadline() else {
            break;
        };
        now = deadline;
        if let GameSnapshot::Snake(state) = session.snapshot() {
            session.handle_input(Intent::Direction(greedy_direction(&state)), now);
        }
        session.advance(now);
    }
}

fn bench_memory_perfect_game() {
    let mut config = PlaygroundConfig::default();
    config.memory.token_count = 32;
    let mut session = GameSession::create(GameKind::Memory, &config, SessionRng::new(7));
    let mut now = Duration::ZERO;
    session.start(now);

    let GameSnapshot::Memory(state) = session.snapshot() else {
        return;
    };
    for token in 0..config.memory.token_count {
        for card in state.cards.iter().filter(|c| c.token_index == token) {
            session.handle_input(Intent::Cell(card.id), now);
        }
        if let Some(deadline) = session.next_deadline() {
            now = deadline;
            session.advance(now);
        }
    }
}

fn bench_whack_full_round() {
    let config = PlaygroundConfig::default();
    let mut session = GameSession::create(GameKind::Whack, &config, SessionRng::new(3));
    session.start(Duration::ZERO);
    session.advance(Duration::from_secs(u64::from(config.whack.duration_sec)));
}

fn simulation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("snake_greedy_game", |b| {
        b.iter(bench_snake_greedy_game)
    });

    group.bench_function("memory_perfect_game", |b| {
        b.iter(bench_memory_perfect_game)
    });

    group.bench_function("whack_full_round", |b| {
        b.iter(bench_whack_full_round)
    });

    group.finish();
}

criterion_group!(benches, simulation_bench);
criterion_main!(benches);
