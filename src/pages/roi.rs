use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::MINUTES_SAVED_PER_DAY;
use crate::roi::{self, employees_from_input, format_money, format_percent, salary_from_input};
use crate::Route;

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> Html {
    let employees = use_state(|| "50".to_string());
    let avg_salary = use_state(|| "60000".to_string());

    let on_employees = {
        let employees = employees.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            employees.set(input.value());
        })
    };
    let on_salary = {
        let avg_salary = avg_salary.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            avg_salary.set(input.value());
        })
    };

    let estimate = roi::estimate(
        employees_from_input(&employees),
        salary_from_input(&avg_salary),
    );

    html! {
        <div class="roi-page">
            <section id="roiCalculator" class="roi-calculator">
                <h1>{"ROI Calculator"}</h1>
                <div class="roi-inputs">
                    <label for="employees">{"Number of employees"}</label>
                    <input
                        id="employees"
                        type="number"
                        min="0"
                        value={(*employees).clone()}
                        oninput={on_employees}
                    />
                    <label for="avgSalary">{"Average salary ($)"}</label>
                    <input
                        id="avgSalary"
                        type="number"
                        min="0"
                        step="1000"
                        value={(*avg_salary).clone()}
                        oninput={on_salary}
                    />
                </div>

                <div id="roiResult">
                    <div class="roi-results">
                        <h3>{"Your Estimated ROI"}</h3>
                        <div class="roi-stat-grid">
                            <div class="roi-stat">
                                <div class="roi-value">{format_money(estimate.annual_savings)}</div>
                                <div class="roi-label">{"Annual Time Savings"}</div>
                            </div>
                            <div class="roi-stat">
                                <div class="roi-value">{format_money(estimate.annual_cost)}</div>
                                <div class="roi-label">{"Estimated Annual Cost"}</div>
                            </div>
                            <div class="roi-stat highlight">
                                <div class="roi-value">{format_money(estimate.net_savings)}</div>
                                <div class="roi-label">{"Net Annual Savings"}</div>
                            </div>
                            <div class="roi-stat highlight">
                                <div class="roi-value">{format_percent(estimate.roi_percent)}</div>
                                <div class="roi-label">{"Return on Investment"}</div>
                            </div>
                        </div>
                        <p class="roi-note">
                            {format!("Based on {} minutes saved per employee per day. ", MINUTES_SAVED_PER_DAY)}
                            <Link<Route> to={Route::Demo}>{"Schedule a demo"}</Link<Route>>
                            {" to get a customized ROI analysis."}
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
