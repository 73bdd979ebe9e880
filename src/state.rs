#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselPhase {
    Resting,      // Card at rest (or settling), idle timer armed
    Dragging,     // A gesture session is active
    SnappingBack, // Released short of the threshold, card returning to rest
    Flipping,     // Card sliding out, index advances when it finishes
    Unmounted,    // No card bound, nothing scheduled
}
