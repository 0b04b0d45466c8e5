use chrono::{Datelike, Local, NaiveDate};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::date_picker::{initial_view, month_grid, parse_birth_date, year_options, WEEKDAY_LABELS};

#[derive(Properties, PartialEq)]
pub struct DatePickerModalProps {
    /// Current `YYYY/MM/DD` value, possibly empty.
    pub selected: AttrValue,
    pub on_select: Callback<NaiveDate>,
    pub on_close: Callback<()>,
}

#[function_component(DatePickerModal)]
pub fn date_picker_modal(props: &DatePickerModalProps) -> Html {
    let today = Local::now().date_naive();
    let (initial_year, initial_month) = initial_view(&props.selected, today);
    let view_year = use_state(|| initial_year);
    let view_month = use_state(|| initial_month);

    let selected = parse_birth_date(&props.selected);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_year = {
        let view_year = view_year.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(year) = select.value().parse::<i32>() {
                view_year.set(year);
            }
        })
    };
    let on_month = {
        let view_month = view_month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(month) = select.value().parse::<u32>() {
                view_month.set(month.min(11));
            }
        })
    };

    let year = *view_year;
    let month0 = *view_month;

    let day_cell = |day: Option<u32>| -> Html {
        let Some(day) = day else {
            return html! { <button type="button" class="day-cell empty" disabled=true></button> };
        };
        let is_selected = selected
            .map(|date| date.year() == year && date.month0() == month0 && date.day() == day)
            .unwrap_or(false);
        let onclick = {
            let on_select = props.on_select.clone();
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month0 + 1, day) {
                    on_select.emit(date);
                }
                on_close.emit(());
            })
        };
        html! {
            <button type="button" class={classes!("day-cell", is_selected.then(|| "selected"))} {onclick}>
                { day }
            </button>
        }
    };

    html! {
        <div class="modal-overlay picker-overlay" onclick={close.clone()}>
            <div class="date-picker" onclick={stop}>
                <div class="date-picker-header">
                    <div class="year-month-selects">
                        <select class="picker-select year" onchange={on_year}>
                            {
                                year_options(today.year()).into_iter().map(|y| html! {
                                    <option key={y} value={y.to_string()} selected={y == year}>
                                        { format!("{}년", y) }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                        <select class="picker-select month" onchange={on_month}>
                            {
                                (0..12u32).map(|m| html! {
                                    <option key={m} value={m.to_string()} selected={m == month0}>
                                        { format!("{:02}월", m + 1) }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <button type="button" class="picker-close" onclick={close}>{"닫기"}</button>
                </div>
                <div class="weekday-row">
                    { for WEEKDAY_LABELS.iter().map(|label| html! { <div class="weekday">{ *label }</div> }) }
                </div>
                <div class="days-grid">
                    {
                        month_grid(year, month0).into_iter().map(|week| html! {
                            <div class="week-row">
                                { for week.into_iter().map(&day_cell) }
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}
