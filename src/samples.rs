// Programs loaded with `--sample`.

pub const ROBOT_SAMPLE: &str = "Robot r1
r1.iniciar()
r1.velocidad=50
r1.base=180
r1.cuerpo=45
r1.garra=90
r1.cerrarGarra()
r1.abrirGarra()
r1.finalizar()";

pub const JAVA_SAMPLE: &str = "public class Ejemplo {
    public static void main(String[] args) {
        int x = 10;
        double y = 3.14;
        // Este es un comentario
        if (x > 5) {
            x++;
        } else {
            x--;
        }
        /* Comentario
           multilinea */
    }
}";
