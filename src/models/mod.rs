pub mod category;
pub mod loaders;
pub mod question;

pub use category::QuizCategory;
pub use loaders::{load_all_text_files, load_text_file, RawDump};
pub use question::{QuizOption, QuizQuestion};
