//! Text rendering of a snapshot: the shaft, the car status lines, and the
//! recent activity.

use std::fmt;

use lift_core::FloorRange;
use lift_fleet::Elevator;
use lift_sim::Snapshot;

const BOX_INNER: usize = 5;
const EMPTY:     &str  = "       ";

/// One full screen for a snapshot.
///
/// Floors are drawn top-down, three lines each: box tops, the row with
/// passenger counts and the waiting count, box bottoms.
pub struct Frame<'a> {
    snapshot: Snapshot<'a>,
    range:    FloorRange,
}

impl<'a> Frame<'a> {
    pub fn new(snapshot: Snapshot<'a>, range: FloorRange) -> Self {
        Self { snapshot, range }
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cars = self.snapshot.elevators;
        writeln!(f, "ELEVATOR SIMULATION  {}\n", self.snapshot.tick)?;

        for floor in self.range.iter().rev() {
            let here = |e: &Elevator| e.current_floor == floor;

            f.write_str("    ")?;
            for car in cars {
                f.write_str(if here(car) { "┌─────┐" } else { EMPTY })?;
            }
            writeln!(f)?;

            write!(f, "{:>2}| ", floor.0)?;
            for car in cars {
                if here(car) {
                    write!(f, "│{:^width$}│", car.passenger_count(), width = BOX_INNER)?;
                } else {
                    f.write_str(EMPTY)?;
                }
            }
            writeln!(f, "Waiting: {}", self.snapshot.waiting_at(floor))?;

            f.write_str("    ")?;
            for car in cars {
                f.write_str(if here(car) { "└─────┘" } else { EMPTY })?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\nLegend: Each box represents an elevator. Number = onboard passengers.\n")?;

        writeln!(f, "Elevator Status:")?;
        for car in cars {
            writeln!(f, "{}", StatusLine(car))?;
        }

        writeln!(f, "\nRecent Activity:")?;
        for line in self.snapshot.recent_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// `Elevator 2: Floor 5, Direction: Up, Passengers: 3, Destinations: 7,1`
pub struct StatusLine<'a>(pub &'a Elevator);

impl fmt::Display for StatusLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let car = self.0;
        write!(
            f,
            "Elevator {}: Floor {}, Direction: {}, Passengers: {}, Destinations: ",
            car.id,
            car.current_floor,
            car.direction,
            car.passenger_count(),
        )?;
        if car.destinations.is_empty() {
            return f.write_str("None");
        }
        for (i, dest) in car.destinations.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{dest}")?;
        }
        Ok(())
    }
}
