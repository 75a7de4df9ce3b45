pub mod iam_names;
