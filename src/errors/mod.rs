pub mod auc_error;
