use grid_util::point::Point;
use tile_pathfinding::{PathFinder, TerrainMap};

// In this example a path is found on a 5x4 map with shape
//  _____
// |S1#11|
// |13#11|
// |1111E|
// |11111|
//  _____
// where
// - # marks an obstacle
// - digits are the cost of entering a tile
// - S marks the start
// - E marks the end
//
// Units move in 4 directions.

fn main() {
    let map = TerrainMap::parse(
        "
        11#11
        13#11
        11111
        11111
        ",
    )
    .unwrap();
    let mut finder = PathFinder::new(&map);
    println!("{}", map);
    let start = Point::new(0, 0);
    let end = Point::new(4, 2);
    match finder.find_path(&map, &(), 8, start, end) {
        Ok(path) => {
            println!("Path:");
            for p in &path {
                println!("{:?}", p);
            }
            println!("Total cost: {}", path.cost());
        }
        Err(err) => println!("{}", err),
    }
}
