use std::io::Write;
use std::time::Duration;

use chrono::Utc;

use marquee_engine::logging::{LoggingConfig, init_logging};
use marquee_ui::prelude::*;

/// Terminal demo: a small status board with animated counters and two live
/// timestamp cards, redrawn at roughly 60 Hz.
fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          MARQUEE STATUS BOARD          ║");
    println!("  ║   live counters  ·  live timestamps    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut board = Board::new();

    // Counters.
    let documents = board.tree_mut().insert(Node::new().id("documents").text("0"));
    let storage = board.tree_mut().insert(Node::new().id("storage").text("0.00%"));

    // Timestamp cards: one recent, one old.
    let deploy = card(&mut board, (Utc::now() - chrono::Duration::seconds(125)).timestamp_millis());
    let backup = card(&mut board, (Utc::now() - chrono::Duration::days(40)).timestamp_millis());

    board.animate_value("documents", 0.0, 12_872.0, Duration::from_millis(1500))?;
    board.animate_percentage_value("storage", 0.0, 73.4, Duration::from_millis(1500))?;

    // ~4 seconds of frames: long enough to watch the counters land and the
    // refresh cadence fire a few times.
    for _ in 0..240 {
        board.frame();

        print!(
            "\r  documents: {:>7}   storage: {:>7}   deployed {:<16} backed up {:<16}",
            board.tree().text(documents),
            board.tree().text(storage),
            board.tree().text(deploy.0),
            board.tree().text(backup.0),
        );
        std::io::stdout().flush()?;

        std::thread::sleep(Duration::from_millis(16));
    }

    board.stop_refresh();
    log::debug!("refresh cadence stopped");

    println!();
    println!();
    println!("  deploy  — {}", board.tree().text(deploy.1));
    println!("  backup  — {}", board.tree().text(backup.1));
    println!();

    Ok(())
}

/// Inserts a timestamp card with relative + fixed slots; returns both slots.
fn card(board: &mut Board, epoch_millis: i64) -> (NodeId, NodeId) {
    let node = board.tree_mut().insert(Node::new().timestamp_millis(epoch_millis));
    let relative = board
        .tree_mut()
        .insert_child(node, Node::new().role(SlotRole::Relative));
    let fixed = board
        .tree_mut()
        .insert_child(node, Node::new().role(SlotRole::Fixed));
    (relative, fixed)
}
