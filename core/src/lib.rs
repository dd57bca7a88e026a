pub mod builder;
pub mod error;
pub mod index;
pub mod search;
pub mod sort;
pub mod source;
pub mod tokenizer;

pub use builder::{BuildConfig, BuildReport, IndexBuilder, INDEXING_ERROR};
pub use error::{BuildError, ReadError};
pub use index::{DocPath, InvertedIndex, Token};
pub use search::SearchEngine;
pub use sort::{merge_sort, merge_sort_by, MergeSort, Sorter};
pub use source::{CollectingSink, DirectoryLister, ErrorSink, FileReader, FsSource, LogSink, MemorySource};
