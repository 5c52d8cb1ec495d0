pub mod comment;

pub use comment::{
    ACKNOWLEDGEMENT_BODY, ACKNOWLEDGEMENT_TITLE, CommentForm, CommentFormValues, FieldError,
    FormField, FormState,
};
