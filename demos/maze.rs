use grid_search::{BfsSearch, Grid, GridSearch, Point};

// In this example a path is found through a 10x10 maze from the top-left to the bottom-right
// corner. The path is drawn with `*`, walls with `#`.

const MAZE: &str = "
    ..#....#..
    .##.##.#.#
    ....#.....
    ##.##.###.
    ...#...#..
    .#.#.#.##.
    .#...#....
    .####.###.
    ......#...
    .####...#.
";

fn main() {
    let grid: Grid = MAZE.parse().unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(grid.width() as i32 - 1, grid.height() as i32 - 1);
    let result = BfsSearch.search(&grid, start, end).unwrap();
    let Some(path) = result.path() else {
        println!("No path found!");
        return;
    };
    for y in 0..grid.height() as i32 {
        let row = (0..grid.width() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if path.contains(&p) {
                    '*'
                } else if grid.is_open(p) {
                    '.'
                } else {
                    '#'
                }
            })
            .collect::<String>();
        println!("{row}");
    }
    println!(
        "Path of {} moves through {} open cells",
        path.len() - 1,
        grid.open_cells().count()
    );
}
