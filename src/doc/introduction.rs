/*!
# Introductory Tutorial for Oto

Begin by opening a terminal and running the executable with no
arguments. If you get the following, you are ready for this tutorial.
Type `EXIT` or CTRL-D to leave.
<pre><code>&nbsp;  Oto sound language. Type HELP for help, EXIT to leave.
&nbsp;  >>> █
</code></pre>

Stop a running program with CTRL-C.

Every line you type is compiled and run right away. Variables you set
stay around for the following lines. Let's print something.

<pre><code>&nbsp;  >>> print 2 + 3 * 4
&nbsp;  14
</code></pre>

Now make a noise. `BEEP` takes a frequency in hertz and a duration in
seconds. Both may be left out.

<pre><code>&nbsp;  >>> beep 440, 0.5
&nbsp;  [Beep] frequency : 440, duration : 0.5
</code></pre>

A sound is an oscillator with a chain of filters. Build one and play it.

<pre><code>&nbsp;  >>> s = SOUND OSC_SQUARE_WAVE
&nbsp;  >>> s <- FADE_OUT 0.3
&nbsp;  >>> play 220, 1, 60, s
&nbsp;  [Play] frequency : [220], duration : 1.00, volume : 60, wave : 2, filters : 1
</code></pre>

Longer programs go in a file. Run one with `oto song.oto`. Add `--repl`
to keep the session open afterwards so you can inspect variables with
`VARS`.

```text
# song.oto
s = SOUND OSC_TRIANGLE_WAVE
f = 262
LOOP 4 BEGIN
    PLAY f, 0.25, 50, s
    f *= 1.25
END
```

*/
