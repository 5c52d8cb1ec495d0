use crate::application::forms::{
    ACKNOWLEDGEMENT_BODY, ACKNOWLEDGEMENT_TITLE, CommentForm, FormField, FormState,
};
use maud::{Markup, html};

const INPUT_CLASS: &str = "block w-full px-3 py-2 mt-1 border rounded shadow outline-none form-input ring-yellow-500 focus:ring";
const TEXTAREA_CLASS: &str = "block w-full px-3 py-2 mt-1 border rounded shadow outline-none form-textarea ring-yellow-500 focus:ring";
const SUBMIT_CLASS: &str = "px-4 py-2 font-bold text-white bg-yellow-500 rounded shadow cursor-pointer hover:bg-yellow-400 focus:shadow-outline focus:outline-none";

/// The comment form in its current state. `Submitted` replaces the form with
/// the moderation acknowledgement.
pub fn render_comment_form(form: &CommentForm, action: &str) -> Markup {
    if form.state() == FormState::Submitted {
        return html! {
            div class="comment-acknowledgement flex flex-col max-w-2xl py-10 mx-auto my-10 text-center text-white bg-yellow-500" {
                h3 class="text-3xl font-bold" { (ACKNOWLEDGEMENT_TITLE) }
                p { (ACKNOWLEDGEMENT_BODY) }
            }
        };
    }

    let values = form.values();
    let submitting = form.state() == FormState::Submitting;

    html! {
        form class="comment-form flex flex-col max-w-2xl p-5 mx-auto mb-10" method="post" action=(action) {
            h3 class="text-sm text-yellow-500" { "Enjoyed this article?" }
            h4 class="text-3xl font-bold" { "Leave a comment below!" }
            hr class="py-3 mt-2";

            input type="hidden" name="_id" value=(form.article_id());

            label class="block mb-5" {
                span class="text-gray-700" { "Name" }
                input class=(INPUT_CLASS) type="text" name=(FormField::Name.as_str())
                    placeholder="John Appleseed" value=(values.name) required;
            }
            label class="block mb-5" {
                span class="text-gray-700" { "Email" }
                input class=(INPUT_CLASS) type="email" name=(FormField::Email.as_str())
                    placeholder="abc@afna.com" value=(values.email) required;
            }
            label class="block mb-5" {
                span class="text-gray-700" { "Comment" }
                textarea class=(TEXTAREA_CLASS) rows="8" name=(FormField::Comment.as_str())
                    placeholder="Comment..." required { (values.comment) }
            }

            @if !form.errors().is_empty() {
                div class="field-errors p-5" {
                    @for error in form.errors() {
                        p class="text-red-500" data-field=(error.field.as_str()) { (error.message) }
                    }
                }
            }

            input class=(SUBMIT_CLASS) type="submit" value="Submit" disabled[submitting];
        }
    }
}
