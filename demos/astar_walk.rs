//! End-to-end demo: random walls, a full A* run, and the step-wise mode,
//! rendered as an ASCII map.
//!
//! Legend: `S` start, `E` end, `#` wall, `*` path, `.` visited, ` ` untouched.

use pathviz_core::{Grid, Point};
use pathviz_search::{Heuristic, Search, SearchConfig, Step};

const WIDTH: i32 = 40;
const HEIGHT: i32 = 16;

fn main() {
    let mut grid = Grid::new(WIDTH, HEIGHT);
    grid.set_start(Point::new(1, 1));
    grid.set_end(Point::new(WIDTH - 2, HEIGHT - 2));
    grid.generate_maze(0.25, &mut rand::rng());

    let config = SearchConfig {
        heuristic: Heuristic::Chebyshev,
        diagonals: true,
        weight: 1.0,
    };

    // Step mode: drive the same search one frame at a time, the way an
    // animation loop would.
    let mut stepped = grid.clone();
    let mut search = Search::new(&mut stepped, config).expect("start and end are set");
    let mut frames = 0usize;
    let stepped_result = loop {
        match search.step().expect("grid state is sane") {
            Step::InProgress { .. } => frames += 1,
            Step::Done(result) => break result,
        }
    };
    println!("step mode: {frames} frames to termination");

    // Run-to-completion on an identical grid.
    let result = Search::new(&mut grid, config)
        .expect("start and end are set")
        .run()
        .expect("grid state is sane");
    assert_eq!(result.path, stepped_result.path);

    render(&grid);
    match &result.path {
        Some(path) => println!(
            "path: {} nodes, cost {:.3}",
            path.len(),
            result.stats.path_cost
        ),
        None => println!("no path"),
    }
    println!(
        "visited {} nodes in {:?}",
        result.stats.visited, result.stats.elapsed
    );
}

fn render(grid: &Grid) {
    for y in 0..grid.height() {
        let mut line = String::with_capacity(grid.width() as usize);
        for x in 0..grid.width() {
            let node = grid.node(Point::new(x, y)).expect("in bounds");
            line.push(if node.start {
                'S'
            } else if node.end {
                'E'
            } else if node.wall {
                '#'
            } else if node.in_path {
                '*'
            } else if node.visited {
                '.'
            } else {
                ' '
            });
        }
        println!("{line}");
    }
}
