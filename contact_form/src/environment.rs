use contact_form_core_form_impl::FormControllerImpl;
use contact_form_core_result_impl::ResultViewImpl;

pub type Controller = FormControllerImpl<ResultViewImpl>;

/// A freshly mounted contact form.
pub fn controller() -> Controller {
    FormControllerImpl::new(ResultViewImpl)
}
