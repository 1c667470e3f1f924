/// Fuzzes the searches by checking on many random grids that a path is found exactly when the goal
/// is reachable, that every path is valid and as short as possible, and that BFS and Dijkstra
/// agree on path length.
use grid_search::{BfsSearch, DijkstraSearch, Grid, GridSearch, Point, SearchResult};
use rand::prelude::*;

/// Random grid where every cell except start and goal is blocked with probability `p_blocked`.
fn random_grid(w: usize, h: usize, rng: &mut StdRng, p_blocked: f64, keep_open: &[Point]) -> Grid {
    let rows = (0..h as i32)
        .map(|y| {
            (0..w as i32)
                .map(|x| !keep_open.contains(&Point::new(x, y)) && rng.gen_bool(p_blocked))
                .collect::<Vec<bool>>()
        })
        .collect::<Vec<_>>();
    Grid::from_occupancy(&rows).unwrap()
}

fn visualize_grid(grid: &Grid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.is_open(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Shortest number of cells on any simple path from `current` to `goal`, by exhaustive
/// enumeration.
fn brute_force_len(grid: &Grid, current: Point, goal: Point, visited: &mut Vec<Point>) -> Option<usize> {
    visited.push(current);
    let best = if current == goal {
        Some(visited.len())
    } else {
        let neighbours = grid.neighbours(current).collect::<Vec<_>>();
        neighbours
            .into_iter()
            .filter_map(|n| {
                if visited.contains(&n) {
                    None
                } else {
                    brute_force_len(grid, n, goal, visited)
                }
            })
            .min()
    };
    visited.pop();
    best
}

#[test]
fn fuzz_reachability() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    let dijkstra = DijkstraSearch::new();
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng, 0.3, &[start, end]);
        let reachable = grid.reachable(start, end);
        let bfs_result = BfsSearch.search(&grid, start, end).unwrap();
        // Show the grid if a path is not found
        if bfs_result.is_found() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(bfs_result.is_found(), reachable);
        let dijkstra_result = dijkstra.search(&grid, start, end).unwrap();
        assert_eq!(dijkstra_result.len(), bfs_result.len());
        if let Some(path) = bfs_result.path() {
            assert!(grid.is_valid_path(path, start, end));
        }
        if let Some(path) = dijkstra_result.path() {
            assert!(grid.is_valid_path(path, start, end));
        }

        // Without the component shortcut the searches flood-fill and must agree.
        grid.component_precheck = false;
        assert_eq!(BfsSearch.search(&grid, start, end).unwrap(), bfs_result);
        assert_eq!(dijkstra.search(&grid, start, end).unwrap().len(), bfs_result.len());
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 4;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    let dijkstra = DijkstraSearch::new();
    for _ in 0..N_GRIDS {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let grid = random_grid(N, N, &mut rng, 0.3, &[start, end]);
        let expected = brute_force_len(&grid, start, end, &mut Vec::new());
        let bfs_result = BfsSearch.search(&grid, start, end).unwrap();
        let dijkstra_result = dijkstra.search(&grid, start, end).unwrap();
        if bfs_result.path().map(<[Point]>::len) != expected {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(bfs_result.path().map(<[Point]>::len), expected);
        assert_eq!(dijkstra_result.path().map(<[Point]>::len), expected);
    }
}

/// Repeated searches on an unchanged grid give paths of the same length, and BFS gives the same
/// path every time.
#[test]
fn repeated_searches_agree() {
    let mut rng = StdRng::seed_from_u64(2);
    let start = Point::new(0, 0);
    let end = Point::new(7, 7);
    let dijkstra = DijkstraSearch::new();
    for _ in 0..100 {
        let grid = random_grid(8, 8, &mut rng, 0.3, &[start, end]);
        let first_bfs = BfsSearch.search(&grid, start, end).unwrap();
        let first_dijkstra = dijkstra.search(&grid, start, end).unwrap();
        for _ in 0..3 {
            assert_eq!(BfsSearch.search(&grid, start, end).unwrap(), first_bfs);
            assert_eq!(
                dijkstra.search(&grid, start, end).unwrap().len(),
                first_dijkstra.len()
            );
        }
    }
}

/// One grid searched concurrently from several threads, each search owning its own state.
#[test]
fn shared_grid_across_threads() {
    let mut rng = StdRng::seed_from_u64(3);
    let start = Point::new(0, 0);
    let end = Point::new(15, 15);
    let grid = random_grid(16, 16, &mut rng, 0.25, &[start, end]);
    let expected = BfsSearch.search(&grid, start, end).unwrap();
    let results = std::thread::scope(|s| {
        let handles = (0..4)
            .map(|i| {
                let grid = &grid;
                s.spawn(move || {
                    if i % 2 == 0 {
                        BfsSearch.search(grid, start, end)
                    } else {
                        DijkstraSearch::new().search(grid, start, end)
                    }
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect::<Vec<SearchResult>>()
    });
    for result in results {
        assert_eq!(result.len(), expected.len());
    }
}
