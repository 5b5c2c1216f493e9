use colored::Colorize;
use flippy_engine::Snapshot;
use flippy_engine::View;

/// Letter shown for a card identity.
pub fn glyph(identity: u8) -> char {
    (b'A' + identity % 26) as char
}

/// One grid cell, padded to a fixed width.
pub fn cell(index: usize, view: View) -> String {
    match view {
        View::Hidden => format!("[{:>2}]", index).dimmed().to_string(),
        View::Revealed(id) => format!("[ {}]", glyph(id)).yellow().bold().to_string(),
        View::Matched(id) => format!("[ {}]", glyph(id)).green().to_string(),
    }
}

/// Status line above the grid.
pub fn header(snapshot: &Snapshot) -> String {
    format!(
        "{}  moves {}  pairs {}/{}  time {}:{:02}",
        snapshot.difficulty.label().bold(),
        snapshot.moves,
        snapshot.matches,
        snapshot.pairs,
        snapshot.elapsed / 60,
        snapshot.elapsed % 60,
    )
}

pub fn render(snapshot: &Snapshot) -> String {
    let cols = snapshot.difficulty.cols();
    let grid = snapshot
        .rows()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, view)| cell(r * cols + c, *view))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("\n{}\n{}\n", header(snapshot), grid)
}

/// Whether a new snapshot is worth drawing. Clock-only changes are not.
pub fn changed(last: Option<&Snapshot>, next: &Snapshot) -> bool {
    match last {
        None => true,
        Some(last) => {
            last.epoch != next.epoch
                || last.moves != next.moves
                || last.complete != next.complete
                || last.cards != next.cards
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flippy_engine::Difficulty;
    use flippy_engine::Engine;

    #[test]
    fn glyphs_are_letters() {
        assert_eq!(glyph(0), 'A');
        assert_eq!(glyph(17), 'R');
    }

    #[test]
    fn hidden_cards_show_their_index() {
        colored::control::set_override(false);
        assert_eq!(cell(7, View::Hidden), "[ 7]");
        assert_eq!(cell(3, View::Revealed(2)), "[ C]");
        assert_eq!(cell(12, View::Matched(0)), "[ A]");
    }

    #[test]
    fn grid_has_one_line_per_row() {
        colored::control::set_override(false);
        let snapshot = Engine::new(Difficulty::Hard).snapshot();
        let text = render(&snapshot);
        assert_eq!(text.trim().lines().count(), 1 + 6);
        assert!(text.contains("[35]"));
    }

    #[test]
    fn clock_ticks_are_not_redrawn() {
        let snapshot = Engine::new(Difficulty::Easy).snapshot();
        let mut later = snapshot.clone();
        later.elapsed += 1;
        assert!(changed(None, &snapshot));
        assert!(!changed(Some(&snapshot), &later));
        later.moves += 1;
        assert!(changed(Some(&snapshot), &later));
    }
}
