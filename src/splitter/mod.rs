pub mod frame;
pub mod sequencer;

pub use frame::{DataSplit, FrameSplitter};
pub use sequencer::{SplitSequence, WindowSequencer};
