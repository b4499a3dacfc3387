use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::catalog::CATALOG;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = CATALOG
        .posts()
        .iter()
        .filter(|p| p.featured)
        .collect::<Vec<_>>();

    view! {
        <Title text="About Me" />
        <div class="max-w-5xl mx-auto page-content">
            <h1 class="text-3xl lg:text-4xl my-8 text-center font-bold section-content">
                "Hi, I'm Peter - Full Stack Software Engineer"
            </h1>
            <section class="flex flex-col lg:flex-row gap-8 lg:gap-12 section-content">
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-6">"What I Do"</h2>
                    <p class="text-base mb-4 leading-relaxed">
                        "I design and build web applications end to end: typed frontends, "
                        "service backends, and the infrastructure that keeps them running."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "Core strengths: "
                        <span class="text-cyan">
                            "React, TypeScript, Node.js, Python, SQL and NoSQL databases, Docker and Kubernetes"
                        </span> "."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "I care about architecture that stays maintainable as a product grows, "
                        "and about sharing what I learn along the way."
                    </p>
                </div>
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-6">"Featured Writing"</h2>
                    <ul class="space-y-3">
                        {featured
                            .into_iter()
                            .map(|post| {
                                view! {
                                    <li class="bg-brightBlack/20 p-3 rounded-md">
                                        <div class="text-xs uppercase text-purple font-medium">
                                            {post.category.label()}
                                        </div>
                                        <div class="font-medium">{post.title.clone()}</div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <p class="mt-4">
                        <A href="/blog" attr:class="text-cyan hover:underline">
                            "Browse all articles →"
                        </A>
                    </p>
                </div>
            </section>
            <section class="flex justify-center items-center mt-12 section-content">
                <div class="w-full max-w-2xl text-center bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                    <h3 class="text-xl font-bold mb-4">"Let's Connect"</h3>
                    <p class="mb-6">
                        "Have a project in mind or want to discuss a collaboration? I'm always open to interesting conversations about technology."
                    </p>
                    <A
                        href="/contact"
                        attr:class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    >
                        "Get In Touch"
                    </A>
                </div>
            </section>
        </div>
    }
}
