//! Record-level plumbing for TPC containers.
//!
//! | Submodule        | Responsibility |
//! |------------------|----------------|
//! | [`block_reader`] | `BlockRead` trait and the 512-byte `FixedBlockReader`. |
//! | [`buffer`]       | `WorkingBuffer`: bounded append at the tail, explicit compaction at the head. |
//! | [`record`]       | `LogicalRecord` view and the 2-byte little-endian prefix codec. |
//! | [`demux`]        | `RecordDemuxer`: refills the buffer until a whole record is present. |
//! | [`writer`]       | `RecordWrite` trait and the variable-length `VarRecordWriter`. |
//! | [`reader`]       | `VarRecordReader`: reads variable-length output back. |
//! | [`container`]    | `ContainerBuilder`: produces fixed-block containers. |

pub mod block_reader;
pub mod buffer;
pub mod container;
pub mod demux;
pub mod reader;
pub mod record;
pub mod writer;

pub use block_reader::{BlockRead, BlockReadError, FixedBlockReader};
pub use buffer::WorkingBuffer;
pub use container::ContainerBuilder;
pub use demux::RecordDemuxer;
pub use reader::VarRecordReader;
pub use record::LogicalRecord;
pub use writer::{RecordWrite, VarFraming, VarRecordWriter};
