//! Walks through an art gallery session on a comb-shaped room.
//!
//! Run with: cargo run --example gallery

use art_gallery::triangulation::EarClipping;
use art_gallery::{GallerySession, Notice, Point2};

fn main() {
    let mut session: GallerySession<f64> = GallerySession::new();

    let clicks = [
        (0.0, 0.0),
        (7.0, 0.0),
        (7.0, 4.0),
        (6.0, 4.0),
        (5.5, 1.0),
        (3.0, -2.0), // crosses the floor, rejected
        (4.0, 4.0),
        (3.0, 4.0),
        (2.5, 1.0),
        (1.0, 4.0),
        (0.0, 4.0),
    ];

    // Coloring before anything exists is refused
    if let Err(err) = session.color() {
        report(err.notice());
    }

    for (x, y) in clicks {
        match session.add_vertex(Point2::new(x, y)) {
            Ok(()) => println!("accepted ({x}, {y})"),
            Err(err) => report(err.notice()),
        }
    }

    if let Err(err) = session.triangulate(&EarClipping) {
        report(err.notice());
    }

    if let Err(err) = session.close() {
        report(err.notice());
        return;
    }
    println!("polygon closed with {} edges", session.edges().len());

    match session.run(&EarClipping) {
        Ok(guards) => println!("guard color {} holds {} vertices", guards.color(), guards.len()),
        Err(err) => {
            report(err.notice());
            return;
        }
    }

    for (point, color) in session.vertex_colors() {
        let label = color.map_or_else(|| "-".to_string(), |c| c.to_string());
        println!("  ({:>4}, {:>4}) color {label}", point.x, point.y);
    }

    for guard in session.guard_points() {
        println!("guard at ({}, {})", guard.x, guard.y);
    }
}

fn report(notice: Notice) {
    println!("[{:?}] {}", notice.severity, notice.message);
}
