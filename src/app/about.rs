use leptos::prelude::*;

use super::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    let paragraph = "mb-6 leading-relaxed text-base md:text-lg text-gray-200 text-justify";

    view! {
        <div class="text-white w-full md:px-6">
            <Reveal class="justify-center flex mb-10">
                <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold">
                    <span class="inline-block mr-3">"👨‍💻"</span>
                    <span class="bg-gradient-to-r from-blue-400 to-cyan-300 bg-clip-text text-transparent">
                        "About Me"
                    </span>
                </h2>
            </Reveal>
            <Reveal
                class="max-w-4xl mx-auto bg-white/5 backdrop-blur-lg rounded-3xl shadow-xl p-8 md:p-12 border border-gray-700 hover:shadow-blue-900/30 transition-shadow"
                delay_ms=200
            >
                <p class=paragraph>
                    "Hi, I'm Roshami, an aspiring full-stack developer with a passion for building innovative and user-friendly web applications. As an undergraduate in "
                    <b class="text-blue-300">"Physical Science (Mathematics with Computer Science)"</b>
                    " at " <b class="text-blue-300">"South Eastern University of Sri Lanka"</b>
                    ", and pursuing a "
                    <b class="text-blue-300">"Bachelor's in Information Technology (External)"</b>
                    " at " <b class="text-blue-300">"the University of Moratuwa"</b>
                    ", I'm laying a strong foundation in both theoretical and practical aspects of technology."
                </p>
                <p class=paragraph>
                    "I'm proficient in "
                    <b class="text-green-300">"JavaScript, React.js, Node.js, Python, Java, SQL, PHP,"</b>
                    " and " <b class="text-green-300">"MongoDB"</b>
                    ", and I love turning ideas into functional solutions through clean, efficient code. While I'm early in my journey, I'm driven by a curiosity to learn, experiment, and solve real-world problems with technology."
                </p>
                <p class="leading-relaxed text-base md:text-lg text-gray-200 text-justify">
                    "When I'm not coding, you'll find me exploring new tech trends, tackling coding challenges, or applying my mathematical mindset to problem-solving. I'm eager to collaborate, learn from others, and contribute to meaningful projects. Let's build something amazing together!"
                </p>
            </Reveal>
        </div>
    }
}
