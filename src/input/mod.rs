//! 输入获取模块
//!
//! 交互式会话（带重试）与矩阵文件导入，二者都产出已校验的 `WeightMatrix`

mod import;
mod row;
mod session;
mod source;

pub use import::{load_matrix, read_text_rows, MatrixFormat};
pub use row::{is_no_edge_token, parse_count, parse_int_lenient, parse_row, parse_source, parse_tokens};
pub use session::{InputSession, SourceRequest};
pub use source::{EditorSource, LineSource, ReaderSource};
