//! Calculator desktop app UI component.

mod engine;

use leptos::ev::KeyboardEvent;
use leptos::*;

use engine::{keyboard_key, BinaryOp, CalcKey, CalculatorState};

#[derive(Clone, Copy)]
struct CalcKeySpec {
    id: &'static str,
    label: &'static str,
    class_name: &'static str,
    key: CalcKey,
}

const fn key_spec(
    id: &'static str,
    label: &'static str,
    class_name: &'static str,
    key: CalcKey,
) -> CalcKeySpec {
    CalcKeySpec {
        id,
        label,
        class_name,
        key,
    }
}

const CALC_KEYS: [CalcKeySpec; 20] = [
    key_spec("clear", "C", "util", CalcKey::Clear),
    key_spec("back", "Back", "util", CalcKey::Backspace),
    key_spec("percent", "%", "util", CalcKey::Percent),
    key_spec("div", "÷", "op", CalcKey::Operator(BinaryOp::Divide)),
    key_spec("7", "7", "digit", CalcKey::Digit('7')),
    key_spec("8", "8", "digit", CalcKey::Digit('8')),
    key_spec("9", "9", "digit", CalcKey::Digit('9')),
    key_spec("mul", "×", "op", CalcKey::Operator(BinaryOp::Multiply)),
    key_spec("4", "4", "digit", CalcKey::Digit('4')),
    key_spec("5", "5", "digit", CalcKey::Digit('5')),
    key_spec("6", "6", "digit", CalcKey::Digit('6')),
    key_spec("sub", "-", "op", CalcKey::Operator(BinaryOp::Subtract)),
    key_spec("1", "1", "digit", CalcKey::Digit('1')),
    key_spec("2", "2", "digit", CalcKey::Digit('2')),
    key_spec("3", "3", "digit", CalcKey::Digit('3')),
    key_spec("add", "+", "op", CalcKey::Operator(BinaryOp::Add)),
    key_spec("sign", "±", "util", CalcKey::ToggleSign),
    key_spec("0", "0", "digit", CalcKey::Digit('0')),
    key_spec("dot", ".", "digit", CalcKey::Decimal),
    key_spec("eq", "=", "equals", CalcKey::Equals),
];

#[component]
/// Standard calculator rendered inside a desktop window.
pub fn CalculatorApp() -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(key) = keyboard_key(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.press(key));
        }
    };

    view! {
        <div class="app app-calculator" tabindex="0" on:keydown=on_keydown>
            <div
                class="calc-display-panel"
                data-error=move || if calc.get().has_error() { "on" } else { "off" }
            >
                <div class="calc-expression" aria-live="off">{move || calc.get().expression_text()}</div>
                <div class="calc-display" role="status" aria-live="polite">{move || calc.get().display_text()}</div>
            </div>

            <div class="calc-keypad" role="group" aria-label="Calculator keys">
                <For each=move || CALC_KEYS.to_vec() key=|button| button.id let:button>
                    <button
                        type="button"
                        class=format!("calc-key {}", button.class_name)
                        on:click=move |_| calc.update(|state| state.press(button.key))
                    >
                        {button.label}
                    </button>
                </For>
            </div>
        </div>
    }
}
