use grid_search::{DijkstraSearch, Level};

// In this example the player walks to the box and the box is then carried to the goal, printing
// the level after every move. Markers:
// - P the player
// - B the box
// - G the goal
// - # a wall

const LEVEL: &str = "
    01000
    01010
    01G10
    00010
    0PB00
";

fn main() {
    let mut level: Level = LEVEL.parse().unwrap();
    println!("{level}");
    let Some(plan) = level.plan_push(&DijkstraSearch::new()).unwrap() else {
        println!("The box cannot be pushed to the goal");
        return;
    };
    for &player in plan.player_path.iter().skip(1) {
        let mut positions = level.positions();
        positions.player = player;
        level.set_positions(positions).unwrap();
        println!("{level}");
    }
    for &box_pos in plan.box_path.iter().skip(1) {
        let mut positions = level.positions();
        positions.box_pos = box_pos;
        level.set_positions(positions).unwrap();
        println!("{level}");
    }
    println!("Solved: {}", level.is_solved());
}
