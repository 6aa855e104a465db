use ghost_core::game::session::{GameSession, Mode, Status};
use ghost_core::model::cell::Cell;
use ghost_core::model::grid::GridWorld;

/// Renders the board plus a status footer. With peep enabled each cell
/// shows its posterior to two decimals; otherwise cells show the recorded
/// reading letter or `.` when unprobed.
pub fn frame(session: &GameSession) -> String {
    let mut out = board(session);
    out.push_str(&status_line(session));
    out.push('\n');
    out
}

fn board(session: &GameSession) -> String {
    let peep = session.peep_enabled();
    let width = if peep { 5 } else { 3 };
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..GridWorld::WIDTH {
        out.push_str(&format!("{col:>width$}"));
    }
    out.push('\n');

    for row in 0..GridWorld::HEIGHT {
        out.push_str(&format!("{row:>2} "));
        for col in 0..GridWorld::WIDTH {
            let cell = Cell::new(col, row);
            if peep {
                out.push_str(&format!(" {:.2}", session.belief().prob(cell)));
            } else {
                let tag = session
                    .observation(cell)
                    .map(|category| category.letter())
                    .unwrap_or('.');
                out.push_str(&format!("{tag:>width$}"));
            }
        }
        out.push('\n');
    }
    out
}

fn status_line(session: &GameSession) -> String {
    match session.status() {
        Status::Won => "Ghost busted! You win!".to_string(),
        Status::Lost if session.bust_attempts() == 0 => {
            "Game over: No more attempts".to_string()
        }
        Status::Lost => "Game over: Out of score".to_string(),
        Status::Active => {
            let mode = match session.mode() {
                Mode::Searching => "searching",
                Mode::AwaitingBust => "bust armed",
            };
            format!(
                "score: {}  attempts: {}  mode: {}",
                session.score(),
                session.bust_attempts(),
                mode
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::frame;
    use ghost_core::game::session::GameSession;
    use ghost_core::model::cell::Cell;

    #[test]
    fn fresh_board_is_unprobed_with_full_budget() {
        let session = GameSession::with_target(Cell::new(3, 3));
        let text = frame(&session);
        assert!(text.contains("score: 35  attempts: 2  mode: searching"));
        assert!(!text.contains('N'));
        assert!(text.contains('.'));
    }

    #[test]
    fn probed_cell_shows_its_reading_letter() {
        let mut session = GameSession::with_target(Cell::new(3, 3));
        session.click(Cell::new(3, 3)).unwrap();
        let text = frame(&session);
        assert!(text.contains('N'));
        assert!(text.contains("score: 34"));
    }

    #[test]
    fn peep_overlays_two_decimal_posteriors() {
        let mut session = GameSession::with_target(Cell::new(3, 3));
        session.toggle_peep();
        let text = frame(&session);
        // Uniform prior over 108 cells rounds to 0.01 everywhere.
        assert!(text.contains("0.01"));
        assert!(text.contains("score: 35"));
    }

    #[test]
    fn win_replaces_the_status_footer() {
        let mut session = GameSession::with_target(Cell::new(3, 3));
        session.request_bust_mode();
        session.click(Cell::new(3, 3)).unwrap();
        assert!(frame(&session).contains("Ghost busted! You win!"));
    }

    #[test]
    fn attempt_exhaustion_names_the_cause() {
        let mut session = GameSession::with_target(Cell::new(3, 3));
        for miss in [Cell::new(0, 0), Cell::new(1, 0)] {
            session.request_bust_mode();
            session.click(miss).unwrap();
        }
        assert!(frame(&session).contains("Game over: No more attempts"));
    }
}
