use crate::domain::errors::SimulatedFault;
use crate::domain::ports::RandomSource;

const POST_FAULT_COUNT: usize = 5;
pub const MEMORY_BALLAST_ITEMS: usize = 1_000_000;

// Pick one of the five POST fault kinds with uniform probability.
pub fn pick_post_fault(random: &dyn RandomSource) -> SimulatedFault {
    match random.next_index(POST_FAULT_COUNT) {
        0 => SimulatedFault::DatabaseConnectionLost,
        1 => SimulatedFault::UndefinedProperty,
        2 => SimulatedFault::IndexOutOfBounds,
        3 => SimulatedFault::UndefinedVariable,
        _ => {
            // Allocate for real so the failure shows up in memory profiles.
            let ballast = vec![0u8; MEMORY_BALLAST_ITEMS];
            SimulatedFault::MemoryExhausted {
                items: ballast.len(),
            }
        }
    }
}
