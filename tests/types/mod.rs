mod failure;
mod validation_error;
