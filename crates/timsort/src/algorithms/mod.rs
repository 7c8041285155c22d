pub(crate) mod insertion_sort;
pub(crate) mod merge;
pub(crate) mod merge_sort_top_down;
pub(crate) mod run;
pub(crate) mod run_stack;
pub(crate) mod timsort;
