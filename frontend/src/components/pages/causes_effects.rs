use yew::prelude::*;

pub fn render() -> Html {
    html! {
        <div class="page content-page">
            <div class="hero">
                <h1>{"Diabetes: Causes & Effects"}</h1>
                <p class="hero-lead">
                    {"Why diabetes develops, what it does to the body over time, and what can \
                      be done to slow or prevent its complications."}
                </p>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-bolt"></i>{" Primary Causes"}</h2>
                </div>
                <div class="card-body info-grid">
                    <div class="info-card">
                        <h3>{"Insulin Resistance"}</h3>
                        <p>{"Muscle, fat, and liver cells stop responding normally to insulin, \
                             the central mechanism of type 2 diabetes."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Beta Cell Dysfunction"}</h3>
                        <p>{"The pancreas gradually loses its capacity to produce enough \
                             insulin to overcome resistance."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Genetic Predisposition"}</h3>
                        <p>{"Family history strongly influences the likelihood of developing \
                             both major forms of diabetes."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Autoimmune Response"}</h3>
                        <p>{"In type 1 diabetes the immune system destroys the insulin-producing \
                             cells of the pancreas."}</p>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-person-running"></i>{" Contributing Lifestyle Factors"}</h2>
                </div>
                <div class="card-body">
                    <ul class="content-list">
                        <li>{"Diets high in processed food and added sugar"}</li>
                        <li>{"Sedentary routines with little physical activity"}</li>
                        <li>{"Chronic stress and poor sleep"}</li>
                        <li>{"Smoking and excessive alcohol consumption"}</li>
                    </ul>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-heart-crack"></i>{" Long-Term Effects"}</h2>
                </div>
                <div class="card-body info-grid">
                    <div class="info-card">
                        <h3>{"Diabetic Retinopathy"}</h3>
                        <p>{"High glucose weakens retinal capillaries, causing leaks, swelling, \
                             and abnormal vessel growth that threatens sight."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Diabetic Nephropathy"}</h3>
                        <p>{"The kidneys' filtering units are progressively destroyed."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Diabetic Neuropathy"}</h3>
                        <p>{"Sensory and autonomic nerves deteriorate, beginning with the \
                             extremities."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Cardiovascular Disease"}</h3>
                        <p>{"Accelerated atherosclerosis raises the risk of heart attack and \
                             stroke."}</p>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-shield-heart"></i>{" Prevention & Management"}</h2>
                </div>
                <div class="card-body details-grid">
                    <div class="details-section">
                        <h3>{"Lifestyle Modifications"}</h3>
                        <p>{"Balanced diet, regular exercise, weight management, and not \
                             smoking remain the foundation of diabetes care."}</p>
                    </div>
                    <div class="details-section">
                        <h3>{"Medical Management"}</h3>
                        <p>{"Glucose monitoring, medication or insulin as prescribed, and \
                             regular HbA1c checks keep blood sugar in range."}</p>
                    </div>
                    <div class="details-section">
                        <h3>{"Complication Prevention"}</h3>
                        <p>{"Annual dilated eye examinations catch retinopathy early, when \
                             treatment is most effective."}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
