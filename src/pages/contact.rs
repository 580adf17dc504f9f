use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::forms::FormKind;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="form-page">
            <h1>{"Get in touch"}</h1>
            <p>{"Questions about Bolt or Sparcle? We usually reply within one business day."}</p>
            <LeadForm kind={FormKind::Contact} />
        </div>
    }
}

#[function_component(Demo)]
pub fn demo() -> Html {
    html! {
        <div class="form-page">
            <h1>{"Book a demo"}</h1>
            <p>{"See Bolt on your own tools in a 30 minute walkthrough."}</p>
            <LeadForm kind={FormKind::Demo} />
        </div>
    }
}
