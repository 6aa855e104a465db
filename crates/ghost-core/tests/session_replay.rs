use ghost_core::belief::NORMALIZATION_TOLERANCE;
use ghost_core::game::serialization::SessionSnapshot;
use ghost_core::game::session::{GameSession, Mode, Status};
use ghost_core::model::cell::Cell;
use ghost_core::model::grid::GridWorld;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_cell(rng: &mut StdRng) -> Cell {
    Cell::new(
        rng.gen_range(0..GridWorld::WIDTH),
        rng.gen_range(0..GridWorld::HEIGHT),
    )
}

#[test]
fn replayed_probe_sequences_are_bit_identical() {
    let mut driver = StdRng::seed_from_u64(20260823);
    let probes: Vec<Cell> = (0..20).map(|_| random_cell(&mut driver)).collect();

    let mut first = GameSession::with_seed(4242);
    let mut second = GameSession::with_seed(4242);
    for probe in &probes {
        first.click(*probe).unwrap();
        second.click(*probe).unwrap();
    }

    assert_eq!(first.target(), second.target());
    assert_eq!(first.belief().values(), second.belief().values());
    assert_eq!(first.score(), second.score());
    assert_eq!(first.observations(), second.observations());
}

#[test]
fn belief_stays_normalized_across_a_random_walk() {
    let mut driver = StdRng::seed_from_u64(7);
    let mut session = GameSession::with_seed(7);

    for _ in 0..30 {
        if session.status() != Status::Active {
            break;
        }
        session.click(random_cell(&mut driver)).unwrap();
        let total = session.belief().total_mass();
        assert!((total - 1.0).abs() < NORMALIZATION_TOLERANCE, "sum {total}");
    }
}

#[test]
fn a_guided_hunt_ends_in_a_win() {
    let target = Cell::new(9, 2);
    let mut session = GameSession::with_target(target);

    // Sweep a few informative probes, then bust the posterior maximum.
    for probe in [
        Cell::new(0, 0),
        Cell::new(11, 8),
        Cell::new(6, 4),
        Cell::new(9, 2),
        Cell::new(10, 3),
    ] {
        session.click(probe).unwrap();
    }

    let guess = session.belief().max_cell();
    assert_eq!(guess, target);

    session.request_bust_mode();
    assert_eq!(session.mode(), Mode::AwaitingBust);
    session.click(guess).unwrap();

    assert_eq!(session.status(), Status::Won);
    assert_eq!(session.bust_attempts(), 2);
    assert_eq!(session.score(), 30);
}

#[test]
fn snapshot_taken_mid_game_resumes_transparently() {
    let mut driver = StdRng::seed_from_u64(99);
    let mut session = GameSession::with_seed(99);
    for _ in 0..8 {
        session.click(random_cell(&mut driver)).unwrap();
    }

    let json = SessionSnapshot::to_json(&session).unwrap();
    let mut restored = SessionSnapshot::from_json(&json).unwrap().restore().unwrap();

    let next = random_cell(&mut driver);
    session.click(next).unwrap();
    restored.click(next).unwrap();

    assert_eq!(session.belief().values(), restored.belief().values());
    assert_eq!(session.score(), restored.score());
    assert_eq!(session.status(), restored.status());
}
