use maze_graph::{Maze, PassabilityGrid, Side};

// In this example a maze is entered from the north and left through the south
// #.#######
// #.....#.#
// #.###.#.#
// #...#...#
// ###.#####
// #.....#.#
// #.###.#.#
// #...#...#
// #######.#
fn main() {
    let grid: PassabilityGrid = "\
        #.#######\n\
        #.....#.#\n\
        #.###.#.#\n\
        #...#...#\n\
        ###.#####\n\
        #.....#.#\n\
        #.###.#.#\n\
        #...#...#\n\
        #######.#\n"
        .parse()
        .expect("valid maze");
    let maze = Maze::new(&grid, Side::North, Side::South).expect("maze has entry points");
    println!(
        "Found {} nodes, start at {}, end at {}",
        maze.graph().node_count(),
        maze.start_position(),
        maze.end_position()
    );
    match maze.solve() {
        Ok(solution) => {
            println!("A route of length {} has been found:", solution.cost);
            for p in solution.waypoints {
                println!("{:?}", p);
            }
        }
        Err(err) => println!("{}", err),
    }
}
