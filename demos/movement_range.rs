use grid_util::point::Point;
use tile_pathfinding::{
    Cost, Passability, PathFinder, RangeMode, SearchTrace, TerrainMap, TerrainSource, TileGrid,
};

// Highlights where a soldier can walk and what it threatens on a small battlefield with a river.
// Soldiers cannot cross water, so the movement range stops at the river bank while the threat
// range spreads over it.

#[derive(Clone, Copy, PartialEq)]
enum Kind {
    Soldier,
    Boat,
}

struct Battlefield {
    terrain: TerrainMap,
    river_x: usize,
}

impl TileGrid for Battlefield {
    fn width(&self) -> usize {
        self.terrain.width()
    }
    fn height(&self) -> usize {
        self.terrain.height()
    }
}

impl TerrainSource for Battlefield {
    fn terrain_cost(&self, x: usize, y: usize) -> Cost {
        self.terrain.cost(x, y)
    }
}

impl Passability for Battlefield {
    type Mover = Kind;

    fn is_blocked(&self, mover: &Kind, x: usize, _y: usize) -> bool {
        (x == self.river_x) != (*mover == Kind::Boat)
    }
}

fn print_range(field: &Battlefield, start: Point, tiles: impl Fn(Point) -> bool) {
    for y in 0..field.height() as i32 {
        let row = (0..field.width() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if p == start {
                    'U'
                } else if tiles(p) {
                    '*'
                } else if x as usize == field.river_x {
                    '~'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", row);
    }
    println!();
}

fn main() {
    let field = Battlefield {
        terrain: TerrainMap::parse(
            "
            1121111
            1121111
            2111112
            1111111
            1121111
            ",
        )
        .unwrap(),
        river_x: 4,
    };
    let mut finder = PathFinder::new(&field);
    let start = Point::new(2, 2);

    let walk = finder.find_range(&field, &Kind::Soldier, 3, start, true);
    println!("Movement range ({} tiles):", walk.len());
    print_range(&field, start, |p| walk.contains(&p));

    let mut trace = SearchTrace::new();
    let threat =
        finder.find_range_observed(&field, &Kind::Soldier, 3, start, RangeMode::Threat, &mut trace);
    println!(
        "Threat range ({} tiles, {} expansions):",
        threat.len(),
        trace.expanded().count()
    );
    print_range(&field, start, |p| threat.contains(&p));

    match finder.find_path(&field, &Kind::Soldier, 3, start, Point::new(3, 0)) {
        Ok(path) => println!("Path to (3, 0): {}", path),
        Err(err) => println!("{}", err),
    }
    match finder.find_path(&field, &Kind::Boat, 4, Point::new(4, 0), Point::new(4, 4)) {
        Ok(path) => println!("Boat down the river: {}", path),
        Err(err) => println!("{}", err),
    }
}
