use yew::prelude::*;

struct DiabetesType {
    name: &'static str,
    onset: &'static str,
    cause: &'static str,
    treatment: &'static str,
}

const MAIN_TYPES: [DiabetesType; 3] = [
    DiabetesType {
        name: "Type 1 Diabetes",
        onset: "Usually childhood or adolescence, can occur at any age",
        cause: "Autoimmune destruction of insulin-producing beta cells",
        treatment: "Lifelong insulin therapy, glucose monitoring, carbohydrate counting",
    },
    DiabetesType {
        name: "Type 2 Diabetes",
        onset: "Typically adulthood, increasingly seen in younger people",
        cause: "Insulin resistance combined with declining insulin production",
        treatment: "Lifestyle changes, oral medication, sometimes insulin",
    },
    DiabetesType {
        name: "Gestational Diabetes",
        onset: "During pregnancy, usually the second or third trimester",
        cause: "Pregnancy hormones interfering with insulin action",
        treatment: "Diet and exercise, insulin if needed; usually resolves after delivery",
    },
];

const SECONDARY_TYPES: [(&str, &str); 4] = [
    (
        "MODY (Maturity-Onset Diabetes of the Young)",
        "A group of inherited single-gene forms of diabetes that appear before age 25.",
    ),
    (
        "Drug-Induced Diabetes",
        "High blood sugar triggered by medications such as corticosteroids.",
    ),
    (
        "Pancreatic Diabetes",
        "Diabetes following pancreatitis, surgery, or other damage to the pancreas.",
    ),
    (
        "Endocrine Diabetes",
        "Secondary to hormone disorders such as Cushing's syndrome or acromegaly.",
    ),
];

pub fn render() -> Html {
    html! {
        <div class="page content-page">
            <div class="hero">
                <h1>{"Types of Diabetes"}</h1>
                <p class="hero-lead">
                    {"The major forms of diabetes differ in cause and treatment, but all of \
                      them can lead to diabetic retinopathy when blood sugar stays elevated."}
                </p>
            </div>

            <div class="card">
                <div class="card-header"><h2>{"Quick Comparison"}</h2></div>
                <div class="card-body info-grid">
                    { for MAIN_TYPES.iter().map(|kind| html! {
                        <div class="info-card">
                            <h3>{ kind.name }</h3>
                            <dl class="details-list">
                                <dt>{"Onset:"}</dt><dd>{ kind.onset }</dd>
                                <dt>{"Cause:"}</dt><dd>{ kind.cause }</dd>
                                <dt>{"Treatment:"}</dt><dd>{ kind.treatment }</dd>
                            </dl>
                        </div>
                    })}
                </div>
            </div>

            <div class="card">
                <div class="card-header"><h2>{"Secondary Types of Diabetes"}</h2></div>
                <div class="card-body info-grid">
                    { for SECONDARY_TYPES.iter().map(|(name, text)| html! {
                        <div class="info-card">
                            <h3>{ *name }</h3>
                            <p>{ *text }</p>
                        </div>
                    })}
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2><i class="fa-solid fa-vial"></i>{" Diagnosis"}</h2>
                </div>
                <div class="card-body details-grid">
                    <div class="details-section">
                        <h3>{"Blood Glucose Tests"}</h3>
                        <ul class="content-list">
                            <li>{"Fasting plasma glucose: diabetes at 126 mg/dL or higher"}</li>
                            <li>{"Oral glucose tolerance test: diabetes at 200 mg/dL or higher"}</li>
                            <li>{"HbA1c: diabetes at 6.5% or higher"}</li>
                        </ul>
                    </div>
                    <div class="details-section">
                        <h3>{"Additional Tests"}</h3>
                        <ul class="content-list">
                            <li>{"Autoantibody panels to distinguish type 1 from type 2"}</li>
                            <li>{"C-peptide to measure remaining insulin production"}</li>
                            <li>{"Annual dilated eye examination once diagnosed"}</li>
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
