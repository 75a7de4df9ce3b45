pub mod iam_client;
