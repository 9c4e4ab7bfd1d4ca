pub const PATIENT_NAME: &str = "María, 45 años";

pub const PATIENT_OPENING_LINE: &str = "Hola, soy María, tengo 45 años. He venido porque he estado sintiendo un dolor en el pecho desde hace 3 días. ¿Puede ayudarme?";

pub const PATIENT_REPLIES: [&str; 6] = [
    "El dolor aparece más cuando hago esfuerzo físico, como subir escaleras. Es como una presión en el centro del pecho.",
    "No, no tengo antecedentes de problemas cardíacos en mi familia. Pero sí fumo desde hace 20 años.",
    "Sí, también he sentido un poco de falta de aire, especialmente en las noches. A veces me despierto sintiéndome agitada.",
    "No estoy tomando ningún medicamento actualmente. La última vez que fui al médico fue hace 2 años.",
    "El dolor dura aproximadamente 10-15 minutos y luego se va. No he tomado nada para el dolor.",
    "Sí, he notado que me canso más fácilmente. Antes podía caminar largas distancias sin problema.",
];
