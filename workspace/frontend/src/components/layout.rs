use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col items-center min-h-screen bg-gradient-to-r from-emerald-300 via-blue-500 to-purple-600">
            <div class="navbar w-full bg-blue-900 shadow-lg justify-center mb-10">
                <h1 class="text-4xl font-bold text-white">{ &props.title }</h1>
            </div>
            <main class="w-full max-w-7xl bg-white rounded-2xl shadow-xl p-8 mt-8 text-black">
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold text-gray-800">{"Car Health Dashboard"}</h1>
                    <p class="text-lg text-gray-500">
                        {"Monitor your vehicle's performance and upcoming maintenance."}
                    </p>
                </div>
                { for props.children.iter() }
            </main>
        </div>
    }
}
