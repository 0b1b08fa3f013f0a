use crate::exercise::*;

use curve_sum_field::*;
use curve_sum_field::canvas::*;

/// Colour of the first curve in every exercise
pub const FIRST_CURVE_COLOR: Color     = Color::Rgba(0.16, 0.42, 0.86, 1.0);

/// Colour of the second curve in every exercise
pub const SECOND_CURVE_COLOR: Color    = Color::Rgba(0.86, 0.22, 0.2, 1.0);

/// Colour of the sum curve and the points on it
pub const SUM_CURVE_COLOR: Color       = Color::Rgba(0.12, 0.64, 0.3, 1.0);

/// Ticks for the exercises on the hyperbola (x = 0 is left out as the hyperbola is undefined there)
const HYPERBOLA_TICKS: [f64; 8] = [-4.0, -2.0, -1.0, -0.5, 0.5, 1.0, 2.0, 4.0];

#[inline]
fn range(min: f64, max: f64) -> WorldRange {
    WorldRange::new_unchecked(min, max)
}

///
/// Two mirror-image parabolas that add up to zero everywhere
///
pub fn symmetric_parabolas() -> Exercise {
    let first   = Curve::new("f1", |x| 0.25 * (x - 4.0).powi(2) + 2.0, FIRST_CURVE_COLOR, "f(x) = 0.25(x-4)^2 + 2");
    let second  = Curve::new("f2", |x| -0.25 * (x - 4.0).powi(2) - 2.0, SECOND_CURVE_COLOR, "g(x) = -0.25(x-4)^2 - 2");
    let sum     = Curve::new("sum", |_| 0.0, SUM_CURVE_COLOR, "h(x) = f(x) + g(x) = 0");

    Exercise {
        id:         "ej1".to_string(),
        title:      "Ejercicio 1: Parábolas Simétricas y Suma Cero".to_string(),
        first, second, sum,
        x_range:    range(-2.0, 10.0),
        y_range:    range(-7.0, 7.0),
        ticks:      vec![0.0, 2.0, 4.0, 6.0, 8.0],
        steps:      vec![
            TutorialStep::new("Introducción: Vamos a sumar dos parábolas que son imágenes especulares. La primera es $f(x) = 0.25(x-4)^2 + 2$ y la segunda es $g(x) = -0.25(x-4)^2 - 2$.",
                StepAction::HighlightSources),
            TutorialStep::new("Paso 1: Análisis en un Punto. Para entender la suma, enfoquémonos en un único valor de $x$. Tomaremos como ejemplo el punto $x = 8$.",
                StepAction::ShowVerticalLine(8.0)),
            TutorialStep::new("Paso 2: Altura de la Primera Curva. Medimos la altura de la curva $f(x)$ en $x=8$. El cálculo es: $f(8) = 0.25(8-4)^2 + 2 = $ 6.0.",
                StepAction::ShowHeight { curve: CurveRole::First, x: 8.0 }),
            TutorialStep::new("Paso 3: Altura de la Segunda Curva. Hacemos lo mismo para la curva $g(x)$. El cálculo es: $g(8) = -0.25(8-4)^2 - 2 = $ -6.0.",
                StepAction::ShowHeight { curve: CurveRole::Second, x: 8.0 }),
            TutorialStep::new("Paso 4: Cálculo de la Suma. La altura de la nueva curva, $h(x)$, es la suma de las alturas individuales: $h(8) = f(8) + g(8) = $ 6.0 $+ ($ -6.0 $) = $ 0.0.",
                StepAction::ShowSumPoint(8.0)),
            TutorialStep::new("Paso 5: Construyendo el Patrón. Ahora, la magia. Repetiremos este proceso de suma para todos nuestros puntos clave a lo largo del eje $X$ para descubrir el patrón que forman.",
                StepAction::AnimateAllTicks),
            TutorialStep::new("Paso 6: La Curva Resultante. Al conectar todos los puntos posibles, el resultado es una línea recta sobre el eje $X$. La función suma es, por tanto, $h(x) = 0$.",
                StepAction::DrawFinalCurve),
            TutorialStep::new("Conclusión: ¡Lo lograste! La suma de estas dos funciones es cero. Esto ocurre porque para cualquier valor de $x$, la altura positiva de $f(x)$ es cancelada exactamente por la altura negativa de $g(x)$.",
                StepAction::Nothing),
        ],
    }
}

///
/// A hyperbola plus a line, which approaches the line away from the origin
///
pub fn hyperbola_and_line() -> Exercise {
    let first   = Curve::new("f1", |x| 1.0 / x, FIRST_CURVE_COLOR, "f(x) = 1/x");
    let second  = Curve::new("f2", |x| x, SECOND_CURVE_COLOR, "g(x) = x");
    let sum     = Curve::new("sum", |x| 1.0 / x + x, SUM_CURVE_COLOR, "h(x) = 1/x + x");

    Exercise {
        id:         "ej2".to_string(),
        title:      "Ejercicio 2: Hipérbola y Recta (Asíntota Oblicua)".to_string(),
        first, second, sum,
        x_range:    range(-5.0, 5.0),
        y_range:    range(-5.0, 5.0),
        ticks:      HYPERBOLA_TICKS.to_vec(),
        steps:      vec![
            TutorialStep::new(r"Introducción: Ahora sumaremos la hipérbola $f(x) = \frac{1}{x}$ y la recta $g(x) = x$. Observa la asíntota vertical en $x=0$, donde $f(x)$ no está definida.",
                StepAction::HighlightSources),
            TutorialStep::new("Paso 1: Análisis en el Lado Positivo. Comencemos en el lado derecho del gráfico, en el punto $x = 2$.",
                StepAction::ShowVerticalLine(2.0)),
            TutorialStep::new(r"Paso 2: Altura de la Hipérbola. La altura de la curva $f(x)$ en $x=2$ se calcula como: $f(2) = \frac{1}{2} = $ 0.5.",
                StepAction::ShowHeight { curve: CurveRole::First, x: 2.0 }),
            TutorialStep::new("Paso 3: Altura de la Recta. Para la curva $g(x)$, la altura es simplemente el mismo valor de $x$: $g(2) = $ 2.0.",
                StepAction::ShowHeight { curve: CurveRole::Second, x: 2.0 }),
            TutorialStep::new("Paso 4: Cálculo de la Suma. La altura de la curva suma, $h(x)$, es: $h(2) = f(2) + g(2) = $ 0.5 $+ $ 2.0 $= $ 2.5.",
                StepAction::ShowSumPoint(2.0)),
            TutorialStep::new("Paso 5: Construyendo la Curva Completa. Repetiremos este proceso en todos nuestros puntos de interés para construir la forma de la nueva curva.",
                StepAction::AnimateAllTicks),
            TutorialStep::new(r"Paso 6: La Curva Resultante. La curva suma completa es $h(x) = \frac{1}{x} + x$. Observa cómo hereda la asíntota vertical en $x=0$ de la hipérbola original.",
                StepAction::DrawFinalCurve),
            TutorialStep::new(r"Conclusión: ¡Asíntota Oblicua! Nota cómo la curva suma $h(x)$ (verde) se aproxima a la recta $g(x)$ (roja) cuando $x$ se aleja de cero. Esto se debe a que el término $\frac{1}{x}$ en la suma $h(x) = x + \frac{1}{x}$ se vuelve insignificante. Por esto, $g(x)=x$ es una asíntota oblicua de $h(x)$.",
                StepAction::Nothing),
        ],
    }
}

///
/// A hyperbola plus a falling line, which cancel out at x = 1 and x = -1
///
pub fn hyperbola_and_inverse_line() -> Exercise {
    let first   = Curve::new("f1", |x| 1.0 / x, FIRST_CURVE_COLOR, "f(x) = 1/x");
    let second  = Curve::new("f2", |x| -x, SECOND_CURVE_COLOR, "g(x) = -x");
    let sum     = Curve::new("sum", |x| 1.0 / x - x, SUM_CURVE_COLOR, "h(x) = 1/x - x");

    Exercise {
        id:         "ej3".to_string(),
        title:      "Ejercicio 3: Hipérbola y Recta Inversa (Cancelación)".to_string(),
        first, second, sum,
        x_range:    range(-5.0, 5.0),
        y_range:    range(-5.0, 5.0),
        ticks:      HYPERBOLA_TICKS.to_vec(),
        steps:      vec![
            TutorialStep::new(r"Introducción: En nuestro último ejercicio, sumaremos la hipérbola $f(x) = \frac{1}{x}$ y la recta $g(x) = -x$. ¿Qué pasará cuando sus valores sean opuestos?",
                StepAction::HighlightSources),
            TutorialStep::new("Paso 1: Análisis en un Punto. Comencemos, como siempre, en un punto simple como $x = 2$.",
                StepAction::ShowVerticalLine(2.0)),
            TutorialStep::new(r"Paso 2: Altura de la Hipérbola. La altura de la curva $f(x)$ en $x=2$ es: $f(2) = \frac{1}{2} = $ 0.5.",
                StepAction::ShowHeight { curve: CurveRole::First, x: 2.0 }),
            TutorialStep::new("Paso 3: Altura de la Recta. La altura de la curva $g(x)$ en $x=2$ es: $g(2) = $ -2.0.",
                StepAction::ShowHeight { curve: CurveRole::Second, x: 2.0 }),
            TutorialStep::new("Paso 4: Suma en $x=2$. La suma de las alturas es: $h(2) = f(2) + g(2) = $ 0.5 $+ ($ -2.0 $) = $ -1.5.",
                StepAction::ShowSumPoint(2.0)),
            TutorialStep::new("Paso 5: Un Punto Especial (Cancelación). Ahora observemos qué ocurre en $x=1$. Aquí, $f(1)=1$ y $g(1)=-1$. ¡Sus alturas son perfectamente opuestas!",
                StepAction::ShowHeights(1.0)),
            TutorialStep::new("Paso 6: La Suma es Cero. Cuando sumamos en $x=1$, obtenemos: $h(1) = f(1) + g(1) = $ 1.0 $+ ($ -1.0 $) = $ 0.0. El punto resultante yace sobre el eje $X$.",
                StepAction::ShowSumPoint(1.0)),
            TutorialStep::new("Paso 7: Construyendo la Curva. Repitamos el proceso para todos nuestros puntos clave. Presta atención a lo que sucede en $x=1$ y $x=-1$.",
                StepAction::AnimateAllTicks),
            TutorialStep::new(r"Paso 8: La Curva Resultante. La curva suma completa es $h(x) = \frac{1}{x} - x$. Los puntos donde cruza el eje $X$ son precisamente donde las funciones originales se cancelaron.",
                StepAction::DrawFinalCurve),
            TutorialStep::new(r"Conclusión: Has visto cómo la suma de dos funciones puede ser cero en puntos específicos. Al igual que en el ejercicio anterior, la recta $g(x)=-x$ actúa como una asíntota oblicua para la curva suma, ya que el término $\frac{1}{x}$ se vuelve insignificante para valores de $x$ muy grandes.",
                StepAction::Nothing),
        ],
    }
}

///
/// The exercises that make up the tutorial, in the order they're offered to the user
///
pub fn exercise_catalog() -> Vec<Exercise> {
    vec![
        symmetric_parabolas(),
        hyperbola_and_line(),
        hyperbola_and_inverse_line(),
    ]
}
