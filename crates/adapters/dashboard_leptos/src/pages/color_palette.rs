//! Reference page for the stylesheet's semantic colors and theme variables.

use leptos::prelude::*;
use zhi_domain::palette::{SWATCHES, THEME_VARIABLES};

#[component]
pub fn ColorPalette() -> impl IntoView {
    let swatches = SWATCHES
        .into_iter()
        .map(|swatch| {
            view! {
                <div class="rounded-lg overflow-hidden shadow-lg bg-base-100">
                    <div class=format!("{} p-6 flex flex-col justify-center items-center", swatch.class)>
                        <span class="font-bold capitalize">{swatch.name}</span>
                    </div>
                    <div class="bg-base-100 p-4 text-sm">
                        <code class="block">{format!("class=\"{}\"", swatch.class)}</code>
                    </div>
                </div>
            }
        })
        .collect_view();

    let rows = THEME_VARIABLES
        .into_iter()
        .map(|var| {
            view! {
                <tr>
                    <td class="px-4 py-2 text-sm font-mono">{var.variable}</td>
                    <td class="px-4 py-2 text-sm">{var.description}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="p-6 bg-base-100">
            <h2 class="text-2xl font-semibold mb-4">"daisyUI Color Palette"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                {swatches}
            </div>

            <section class="mt-12">
                <h2 class="text-2xl font-semibold mb-4">"主题 CSS 变量"</h2>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-base-200">
                            <tr>
                                <th class="px-4 py-2 text-left text-sm font-medium">"CSS 变量"</th>
                                <th class="px-4 py-2 text-left text-sm font-medium">"描述"</th>
                            </tr>
                        </thead>
                        <tbody class="bg-base-200 divide-y divide-gray-200">{rows}</tbody>
                    </table>
                </div>
            </section>
        </div>
    }
}
