use yew::prelude::*;

pub fn render() -> Html {
    html! {
        <div class="page content-page">
            <div class="hero">
                <h1>{"Understanding Diabetes"}</h1>
                <p class="hero-lead">
                    {"Diabetes is a chronic condition in which the body cannot properly regulate \
                      blood sugar. Left uncontrolled, persistently high glucose damages blood \
                      vessels throughout the body, including the delicate vessels of the retina."}
                </p>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-droplet"></i>{" Blood Sugar Levels"}</h2>
                </div>
                <div class="card-body">
                    <h3>{"Normal vs. Diabetic Blood Sugar Levels"}</h3>
                    <ul class="content-list">
                        <li>{"Normal fasting: 70-99 mg/dL"}</li>
                        <li>{"Prediabetes fasting: 100-125 mg/dL"}</li>
                        <li>{"Diabetes fasting: 126 mg/dL or higher on two separate tests"}</li>
                    </ul>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-arrow-trend-up"></i>{" How Diabetes Develops"}</h2>
                </div>
                <div class="card-body stage-grid">
                    <div class="stage">
                        <h3>{"Normal Function"}</h3>
                        <p>{"The pancreas releases insulin after meals, moving glucose from the \
                             bloodstream into cells for energy."}</p>
                    </div>
                    <div class="stage">
                        <h3>{"Insulin Resistance"}</h3>
                        <p>{"Cells respond less and less to insulin, so the pancreas compensates \
                             by producing more of it."}</p>
                    </div>
                    <div class="stage">
                        <h3>{"Beta Cell Dysfunction"}</h3>
                        <p>{"The overworked insulin-producing beta cells begin to fail and \
                             output declines."}</p>
                    </div>
                    <div class="stage">
                        <h3>{"Hyperglycemia"}</h3>
                        <p>{"Glucose accumulates in the blood, silently damaging vessels and \
                             nerves over years."}</p>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-list-check"></i>{" Risk Factors"}</h2>
                </div>
                <div class="card-body details-grid">
                    <div class="details-section">
                        <h3>{"Non-Modifiable Risk Factors"}</h3>
                        <ul class="content-list">
                            <li>{"Family history of diabetes"}</li>
                            <li>{"Age over 45"}</li>
                            <li>{"Ethnic background"}</li>
                            <li>{"History of gestational diabetes"}</li>
                        </ul>
                    </div>
                    <div class="details-section">
                        <h3>{"Modifiable Risk Factors"}</h3>
                        <ul class="content-list">
                            <li>{"Excess body weight"}</li>
                            <li>{"Physical inactivity"}</li>
                            <li>{"Unbalanced diet high in refined sugar"}</li>
                            <li>{"Smoking and high blood pressure"}</li>
                        </ul>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-heart-crack"></i>{" Major Complications"}</h2>
                </div>
                <div class="card-body info-grid">
                    <div class="info-card">
                        <h3>{"Diabetic Retinopathy"}</h3>
                        <p>{"Damage to the retinal blood vessels; the leading cause of blindness \
                             in working-age adults and the focus of this screening tool."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Cardiovascular Disease"}</h3>
                        <p>{"Two to four times higher risk of heart attack and stroke."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Diabetic Nephropathy"}</h3>
                        <p>{"Progressive kidney damage that can end in kidney failure."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Neuropathy"}</h3>
                        <p>{"Nerve damage causing pain, numbness, and slow-healing wounds, \
                             most often in the feet."}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
